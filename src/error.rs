use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinchartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chart document {path}: {source}")]
    ChartDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FinchartError {
    /// Short category name used as the error heading in CLI output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::ChartDocument { .. } | Self::Json(_) => "ChartData",
            Self::InvalidInput(_) => "Input",
            Self::Io(_) => "IO",
        }
    }

    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::InvalidInput(msg) => msg.clone(),
            Self::FileAccess { path, .. } => format!("cannot read {}", path.display()),
            Self::ChartDocument { path, .. } => format!("cannot parse {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::ChartDocument { source, .. } => Some(format!(
                "{source} (line {}, column {})",
                source.line(),
                source.column()
            )),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `finchart init` for a template")
            }
            Self::FileAccess { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::ChartDocument { .. } | Self::Json(_) => Some(
                "Chart documents must be JSON objects with chartType, config, data and chartConfig",
            ),
            Self::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FinchartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
