use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::chart::ChartDocument;
use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{FinchartError, Result};
use crate::output::{ColorMode, ErrorOutput};

const DOCUMENT_EXTENSION: &str = "json";

/// One chart payload and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSource {
    /// File path, or `path#message-id` for transcript charts.
    pub source: String,
    pub payload: Value,
}

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load configuration for a command, noting its origin at `-v`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub(crate) fn load_cli_config(cli: &Cli) -> Result<Config> {
    let result = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &result.source {
        verbose_note(cli, &format!("Using config: {}", source.display()));
    }
    Ok(result.config)
}

/// Print a crate error on stderr in the selected color mode.
pub(crate) fn report_error(error: &FinchartError, cli: &Cli) {
    ErrorOutput::new(color_choice_to_mode(cli.color)).report(error);
}

/// Diagnostic line on stderr, shown with `-v` unless `--quiet` is set.
pub(crate) fn verbose_note(cli: &Cli, message: &str) {
    if cli.verbose > 0 && !cli.quiet {
        eprintln!("{message}");
    }
}

/// Expand files and directories into the chart documents to process.
///
/// Directories are walked recursively for `*.json` files, in file-name order.
///
/// # Errors
/// Returns an error if a path does not exist or a directory cannot be read.
pub(crate) fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| FinchartError::FileAccess {
                    path: e.path().map_or_else(|| path.clone(), Path::to_path_buf),
                    source: e.into(),
                })?;
                let is_document = entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
                if is_document {
                    documents.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            documents.push(path.clone());
        } else {
            return Err(FinchartError::FileAccess {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }

    Ok(documents)
}

/// Read and parse a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| FinchartError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FinchartError::ChartDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a chart document and list its chart payloads in display order.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a chart document.
pub(crate) fn read_chart_sources(path: &Path) -> Result<Vec<ChartSource>> {
    let document = ChartDocument::from_value(read_json(path)?).map_err(|e| match e {
        FinchartError::Json(source) => FinchartError::ChartDocument {
            path: path.to_path_buf(),
            source,
        },
        FinchartError::InvalidInput(message) => {
            FinchartError::InvalidInput(format!("{}: {message}", path.display()))
        }
        other => other,
    })?;
    Ok(chart_sources(path, &document))
}

/// Chart payloads of a document, labeled with their origin.
#[must_use]
pub fn chart_sources(path: &Path, document: &ChartDocument) -> Vec<ChartSource> {
    let origin = path.display().to_string();
    match document {
        ChartDocument::Transcript(transcript) => transcript
            .charts_newest_first()
            .into_iter()
            .map(|chart| ChartSource {
                source: format!("{origin}#{}", chart.message_id),
                payload: chart.payload.clone(),
            })
            .collect(),
        ChartDocument::Chart(_) | ChartDocument::Response(_) => document
            .chart_payloads()
            .into_iter()
            .map(|payload| ChartSource {
                source: origin.clone(),
                payload: payload.clone(),
            })
            .collect(),
    }
}

/// Drop table captions when `[table] show_footer = false`.
pub(crate) fn apply_table_config(payload: &mut Value, config: &Config) {
    if config.table.show_footer {
        return;
    }
    let is_table = payload.get("chartType").and_then(Value::as_str) == Some("tabular");
    if is_table
        && let Some(meta) = payload.get_mut("config").and_then(Value::as_object_mut)
    {
        meta.remove("footer");
    }
}

/// Write output to a file, or to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file or its parent directories cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Terminate a document with a newline for terminal output.
#[must_use]
pub(crate) fn with_trailing_newline(mut content: String) -> String {
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
