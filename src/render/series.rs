//! Category-axis charts: bar, multiBar, line, area and stackedArea.

use serde::Serialize;

use super::palette::Palette;
use crate::chart::{CellValue, ChartData, ChartKind};
use crate::format::truncate_tick_label;

/// Fill opacity of area charts.
pub const AREA_FILL_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesStyle {
    Bar,
    GroupedBar,
    Line,
    Area,
    StackedArea,
}

impl SeriesStyle {
    /// Style for a series chart kind; `None` for pie, tabular and unknown kinds.
    #[must_use]
    pub const fn for_kind(kind: &ChartKind) -> Option<Self> {
        match kind {
            ChartKind::Bar => Some(Self::Bar),
            ChartKind::MultiBar => Some(Self::GroupedBar),
            ChartKind::Line => Some(Self::Line),
            ChartKind::Area => Some(Self::Area),
            ChartKind::StackedArea => Some(Self::StackedArea),
            ChartKind::Pie | ChartKind::Tabular | ChartKind::Unknown(_) => None,
        }
    }

    #[must_use]
    pub const fn is_bar(self) -> bool {
        matches!(self, Self::Bar | Self::GroupedBar)
    }

    /// All series share one stack.
    #[must_use]
    pub const fn is_stacked(self) -> bool {
        matches!(self, Self::StackedArea)
    }

    #[must_use]
    pub const fn fill_opacity(self) -> Option<f64> {
        match self {
            Self::Area | Self::StackedArea => Some(AREA_FILL_OPACITY),
            Self::Bar | Self::GroupedBar | Self::Line => None,
        }
    }
}

/// One category on the x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    /// Display label, shortened when long.
    pub label: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub key: String,
    pub label: String,
    pub color: String,
    /// One value per category; missing or non-numeric fields are 0.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesView {
    pub style: SeriesStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_key: Option<String>,
    pub categories: Vec<AxisTick>,
    pub series: Vec<Series>,
}

impl SeriesView {
    /// Per-category sum of all series.
    #[must_use]
    pub fn stack_totals(&self) -> Vec<f64> {
        (0..self.categories.len())
            .map(|i| self.series.iter().filter_map(|s| s.values.get(i)).sum())
            .collect()
    }

    /// Running totals a stacked chart reaches, layer by layer.
    fn stack_levels(&self) -> Vec<f64> {
        let mut running = vec![0.0_f64; self.categories.len()];
        let mut levels = Vec::with_capacity(running.len() * self.series.len());
        for series in &self.series {
            for (total, value) in running.iter_mut().zip(&series.values) {
                *total += value;
                levels.push(*total);
            }
        }
        levels
    }

    fn extent_values(&self) -> Vec<f64> {
        if self.style.is_stacked() {
            return self.stack_levels();
        }
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .collect()
    }

    /// Largest value the y axis has to reach (never below 0).
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.extent_values().into_iter().fold(0.0, f64::max)
    }

    /// Smallest value the y axis has to reach (never above 0).
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.extent_values().into_iter().fold(0.0, f64::min)
    }
}

pub(super) fn render_series(chart: &ChartData, palette: &Palette, style: SeriesStyle) -> SeriesView {
    let axis_key = chart.config().x_axis_key.clone();

    let categories = chart
        .rows()
        .iter()
        .map(|row| {
            let full = axis_key
                .as_deref()
                .and_then(|key| row.get(key))
                .map(ToString::to_string)
                .unwrap_or_default();
            AxisTick {
                label: truncate_tick_label(&full),
                full,
            }
        })
        .collect();

    let mut keys = chart.series_keys();
    // A plain bar chart draws only its first series
    if style == SeriesStyle::Bar {
        keys.truncate(1);
    }

    let series = keys
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            let color = chart
                .chart_config()
                .get(key)
                .and_then(|entry| entry.color.clone())
                .filter(|color| !color.trim().is_empty())
                .unwrap_or_else(|| palette.color_at(index).to_string());
            let values = chart
                .rows()
                .iter()
                .map(|row| row.get(key).and_then(CellValue::coerce_number).unwrap_or(0.0))
                .collect();
            Series {
                key: key.to_string(),
                label: chart.label_for(key),
                color,
                values,
            }
        })
        .collect();

    SeriesView {
        style,
        axis_key,
        categories,
        series,
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
