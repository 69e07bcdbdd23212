mod error_output;
mod html;
mod html_template;
mod json;
mod markdown;
mod progress;
pub mod svg;
mod svg_doc;
mod text;

pub use error_output::{ErrorOutput, print_warning_full};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use progress::BatchProgress;
pub use svg_doc::SvgFormatter;
pub use text::TextFormatter;

use serde_json::Value;

use crate::error::Result;
use crate::export::{CsvExport, export_csv};
use crate::render::{BoundaryOutcome, ChartView, Palette, Rendered, ViewBody, render_payload};

/// One chart payload after the render boundary, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    /// Input file, or `file#message-id` for transcript charts.
    pub source: String,
    pub outcome: BoundaryOutcome,
    /// CSV download offered next to exportable tables.
    pub export: Option<CsvExport>,
}

impl RenderedItem {
    #[must_use]
    pub fn new(source: impl Into<String>, outcome: BoundaryOutcome) -> Self {
        Self {
            source: source.into(),
            outcome,
            export: None,
        }
    }

    /// Run a raw payload through the render boundary.
    ///
    /// Tables that show their header also carry their CSV export, built
    /// from the same parsed chart.
    #[must_use]
    pub fn render(source: impl Into<String>, payload: &Value, palette: &Palette) -> Self {
        let (outcome, export) = match render_payload(payload, palette) {
            Ok((chart, rendered)) => {
                let exportable = matches!(
                    rendered.view().map(|view| &view.body),
                    Some(ViewBody::Table(table)) if table.exportable
                );
                let export = exportable.then(|| export_csv(&chart));
                (BoundaryOutcome::Rendered(rendered), export)
            }
            Err(e) => (BoundaryOutcome::failure(e), None),
        };
        Self {
            source: source.into(),
            outcome,
            export,
        }
    }

    /// The rendered view, when there is one to show.
    #[must_use]
    pub fn view(&self) -> Option<&ChartView> {
        match &self.outcome {
            BoundaryOutcome::Rendered(rendered) => rendered.view(),
            BoundaryOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BoundaryOutcome::Failed(message) => Some(message),
            BoundaryOutcome::Rendered(_) => None,
        }
    }

    /// Unknown chart types render nothing and are skipped by every backend.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.outcome, BoundaryOutcome::Rendered(Rendered::Nothing))
    }
}

/// Trait for turning rendered charts into an output document.
pub trait OutputFormatter {
    /// Format a batch of rendered charts into one document.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, items: &[RenderedItem]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Svg,
    Html,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "svg" => Ok(Self::Svg),
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// Whether stdout output should carry ANSI colors.
pub(crate) fn stdout_supports_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Presence of NO_COLOR (any value) disables color, see https://no-color.org
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
