//! CSV export of a chart's tabular data.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::ChartData;
use crate::error::{FinchartError, Result};
use crate::format::format_value;
use crate::render::resolve_columns;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// File stem used when a chart has no title.
pub const DEFAULT_EXPORT_NAME: &str = "export";

/// A CSV download ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub mime: &'static str,
}

/// Build the CSV text for a chart.
///
/// The header holds column labels. Values use the declared column format
/// only and are never truncated. Rows are joined with `\n`, with no trailing
/// newline.
#[must_use]
pub fn csv_content(chart: &ChartData) -> String {
    let columns = resolve_columns(chart);

    let header = columns
        .iter()
        .map(|column| csv_escape(&column.label))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(chart.rows().len() + 1);
    lines.push(header);

    for row in chart.rows() {
        let line = columns
            .iter()
            .map(|column| {
                let formatted = row
                    .get(&column.key)
                    .map(|value| format_value(value, column.format))
                    .unwrap_or_default();
                csv_escape(&formatted).into_owned()
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// Quote a field that contains a comma, a quote or a line break.
#[must_use]
pub fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// `<title>.csv`, or `export.csv` for an untitled chart.
///
/// Path separators in the title are replaced so the file always lands in
/// the chosen directory.
#[must_use]
pub fn export_filename(title: &str) -> String {
    let stem = title.trim();
    let stem = if stem.is_empty() {
        DEFAULT_EXPORT_NAME.to_string()
    } else {
        stem.replace(['/', '\\'], "_")
    };
    let stem = if stem == "." || stem == ".." {
        DEFAULT_EXPORT_NAME.to_string()
    } else {
        stem
    };
    format!("{stem}.csv")
}

#[must_use]
pub fn export_csv(chart: &ChartData) -> CsvExport {
    CsvExport {
        filename: export_filename(&chart.config().title),
        content: csv_content(chart),
        mime: CSV_MIME,
    }
}

/// Save an export into `dir`, creating it when needed. Returns the written path.
///
/// # Errors
/// Returns an error if the directory or the file cannot be written.
pub fn write_download(export: &CsvExport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| FinchartError::FileAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&export.filename);
    fs::write(&path, &export.content).map_err(|source| FinchartError::FileAccess {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
