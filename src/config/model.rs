use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::svg::ChartSize;
use crate::render::Palette;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_CHART_WIDTH: f64 = 640.0;
pub const DEFAULT_CHART_HEIGHT: f64 = 320.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub table: TableConfig,
}

/// `[render]`: chart document size and series palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Overrides the built-in series colors. Empty keeps the defaults.
    #[serde(default)]
    pub palette: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            palette: Vec::new(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone())
    }

    #[must_use]
    pub const fn size(&self) -> ChartSize {
        ChartSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// `[export]`: where CSV downloads are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// `[table]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Show `config.footer` as the table caption.
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

const fn default_width() -> f64 {
    DEFAULT_CHART_WIDTH
}

const fn default_height() -> f64 {
    DEFAULT_CHART_HEIGHT
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
