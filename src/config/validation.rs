//! Configuration semantic validation.
//!
//! Range checks on values that parse but cannot be used.

use crate::config::Config;
use crate::{FinchartError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the chart size is not positive and finite, or a
/// palette entry is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_render_section(config)?;
    validate_export_section(config)?;
    Ok(())
}

fn validate_render_section(config: &Config) -> Result<()> {
    let render = &config.render;
    for (name, value) in [("width", render.width), ("height", render.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(FinchartError::Config(format!(
                "render.{name} must be a positive number, got {value}"
            )));
        }
    }

    if let Some(i) = render.palette.iter().position(|color| color.trim().is_empty()) {
        return Err(FinchartError::Config(format!(
            "render.palette[{i}] must not be empty"
        )));
    }
    Ok(())
}

fn validate_export_section(config: &Config) -> Result<()> {
    if config.export.output_dir.as_os_str().is_empty() {
        return Err(FinchartError::Config(
            "export.output_dir must not be empty".to_string(),
        ));
    }
    Ok(())
}
