//! Tables: column resolution and cell formatting.

use serde::Serialize;

use crate::chart::{ChartData, ColumnAlign, DataFormat, is_id_like};
use crate::format::{CELL_MAX_CHARS, format_value, truncate_cell};

/// A table column with every attribute settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColumn {
    pub key: String,
    pub label: String,
    /// Format declared by a column definition or `chartConfig`. CSV export uses this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
    /// Declared format, else the inferred one. Display and alignment use this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_format: Option<DataFormat>,
    pub align: ColumnAlign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Effective columns of a chart, in display order.
///
/// `config.columns` when present, else every first-row key except
/// identifier columns. Works for any chart kind, which lets non-tabular
/// charts be exported as CSV too.
#[must_use]
pub fn resolve_columns(chart: &ChartData) -> Vec<ResolvedColumn> {
    let keys: Vec<&str> = match &chart.config().columns {
        Some(columns) => columns.iter().map(|c| c.key.as_str()).collect(),
        None => chart
            .rows()
            .first()
            .map(|row| {
                row.keys()
                    .map(String::as_str)
                    .filter(|key| !is_id_like(key))
                    .collect()
            })
            .unwrap_or_default(),
    };

    keys.into_iter().map(|key| resolve_column(chart, key)).collect()
}

fn resolve_column(chart: &ChartData, key: &str) -> ResolvedColumn {
    let definition = chart
        .config()
        .columns
        .as_ref()
        .and_then(|columns| columns.iter().find(|c| c.key == key));
    let entry = chart.chart_config().get(key);

    let label = definition
        .map(|d| d.label.as_str())
        .filter(|label| !label.is_empty())
        .map_or_else(|| chart.label_for(key), str::to_string);

    let format = definition
        .and_then(|d| d.format)
        .or_else(|| entry.and_then(|e| e.format));
    let display_format = format.or_else(|| chart.inferred_format(key));

    let align = entry.and_then(|e| e.align).unwrap_or(
        if display_format == Some(DataFormat::Number) {
            ColumnAlign::Right
        } else {
            ColumnAlign::Left
        },
    );

    ResolvedColumn {
        key: key.to_string(),
        label,
        format,
        display_format,
        align,
        width: entry.and_then(|e| e.width.clone()),
        color: entry.and_then(|e| e.color.clone()),
    }
}

/// One formatted table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    /// Shortened text for display.
    pub display: String,
    /// Full formatted text (tooltip).
    pub full: String,
    pub truncated: bool,
}

impl TableCell {
    fn new(full: String) -> Self {
        let truncated = full.chars().count() > CELL_MAX_CHARS;
        let display = if truncated { truncate_cell(&full) } else { full.clone() };
        Self {
            display,
            full,
            truncated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<ResolvedColumn>,
    pub rows: Vec<Vec<TableCell>>,
    /// Whether the header block with the export action is shown.
    pub exportable: bool,
}

impl TableView {
    /// Column keys in display order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }
}

pub(super) fn render_table(chart: &ChartData) -> TableView {
    let columns = resolve_columns(chart);

    let rows = chart
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let full = row
                        .get(&column.key)
                        .map(|value| format_value(value, column.display_format))
                        .unwrap_or_default();
                    TableCell::new(full)
                })
                .collect()
        })
        .collect();

    let config = chart.config();
    TableView {
        columns,
        rows,
        exportable: !config.title.is_empty() || !config.description.is_empty(),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
