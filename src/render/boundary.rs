//! The error boundary between untrusted chart payloads and the renderers.

use serde::Deserialize;
use serde_json::Value;

use super::palette::Palette;
use super::{Rendered, render_chart};
use crate::chart::ChartData;

/// Prefix of the inline message shown in place of a chart that failed.
pub const RENDER_ERROR_PREFIX: &str = "Error rendering chart: ";

/// Result of rendering one untrusted payload.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome {
    Rendered(Rendered),
    /// Inline message to display instead of the chart.
    Failed(String),
}

impl BoundaryOutcome {
    #[must_use]
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self::Failed(format!("{RENDER_ERROR_PREFIX}{message}"))
    }
}

/// Parse and render a raw payload, handing back the parsed chart.
///
/// # Errors
/// Returns the deserialization error when the payload does not match the contract.
pub fn render_payload(
    payload: &Value,
    palette: &Palette,
) -> serde_json::Result<(ChartData, Rendered)> {
    let chart = ChartData::deserialize(payload)?;
    let rendered = render_chart(&chart, palette);
    Ok((chart, rendered))
}

/// Render a raw payload, turning any failure into an inline message.
#[must_use]
pub fn render_boundary(payload: &Value, palette: &Palette) -> BoundaryOutcome {
    match render_payload(payload, palette) {
        Ok((_, rendered)) => BoundaryOutcome::Rendered(rendered),
        Err(e) => BoundaryOutcome::failure(e),
    }
}

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;
