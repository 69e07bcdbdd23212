//! Pie charts: one slice per row, total at the center.

use serde::Serialize;

use super::palette::Palette;
use crate::chart::{CellValue, ChartData};
use crate::format::format_number;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub segment: String,
    pub value: f64,
    pub color: String,
    /// Share of the total in `0.0..=1.0`; 0 when the total is not positive.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieView {
    pub slices: Vec<PieSlice>,
    pub total: f64,
    pub total_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_label: Option<String>,
}

pub(super) fn render_pie(chart: &ChartData, palette: &Palette) -> PieView {
    let values: Vec<f64> = chart
        .rows()
        .iter()
        .map(|row| row.get("value").and_then(CellValue::coerce_number).unwrap_or(0.0))
        .collect();
    let total: f64 = values.iter().sum();

    let slices = chart
        .rows()
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (row, value))| PieSlice {
            segment: row.get("segment").map(ToString::to_string).unwrap_or_default(),
            value,
            color: palette.color_at(index).to_string(),
            fraction: if total > 0.0 { value / total } else { 0.0 },
        })
        .collect();

    PieView {
        slices,
        total,
        total_display: format_number(total),
        total_label: chart.config().total_label.clone(),
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
