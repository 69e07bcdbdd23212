//! Chart-type dispatch and the per-type rendering rules.
//!
//! Renderers are pure: a `ChartData` plus a `Palette` in, a view model out.
//! Output backends turn view models into text, SVG, HTML and so on.

mod boundary;
mod palette;
mod pie;
mod series;
mod table;

use serde::Serialize;

pub use boundary::{BoundaryOutcome, RENDER_ERROR_PREFIX, render_boundary, render_payload};
pub use palette::{DEFAULT_CHART_COLORS, Palette};
pub use pie::{PieSlice, PieView};
pub use series::{AREA_FILL_OPACITY, AxisTick, Series, SeriesStyle, SeriesView};
pub use table::{ResolvedColumn, TableCell, TableView, resolve_columns};

use crate::chart::{ChartData, ChartKind, Trend, TrendDirection};
use crate::format::plain_number;

/// Trend line shown under a chart or table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendIndicator {
    pub direction: TrendDirection,
    pub percentage: f64,
    pub text: String,
}

impl TrendIndicator {
    /// `Trending up by 5.2% this period`
    #[must_use]
    pub fn for_chart(trend: &Trend) -> Self {
        Self::with_text(trend, format!("{} this period", Self::base_text(trend)))
    }

    /// Tables drop the period suffix: `Trending up by 5.2%`
    #[must_use]
    pub fn for_table(trend: &Trend) -> Self {
        Self::with_text(trend, Self::base_text(trend))
    }

    fn base_text(trend: &Trend) -> String {
        format!(
            "Trending {} by {}%",
            trend.direction.as_str(),
            plain_number(trend.percentage)
        )
    }

    const fn with_text(trend: &Trend, text: String) -> Self {
        Self {
            direction: trend.direction,
            percentage: trend.percentage,
            text,
        }
    }

    /// Arrow glyph for plain-text backends.
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self.direction {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewBody {
    Series(SeriesView),
    Pie(PieView),
    Table(TableView),
}

/// A rendered chart, independent of the output backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub chart_type: ChartKind,
    pub title: String,
    pub description: String,
    pub body: ViewBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// Dispatcher result. Unknown chart types render `Nothing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Nothing,
    View(Box<ChartView>),
}

impl Rendered {
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    #[must_use]
    pub fn view(&self) -> Option<&ChartView> {
        match self {
            Self::Nothing => None,
            Self::View(view) => Some(&**view),
        }
    }
}

/// Render a chart with the rule set of its type.
#[must_use]
pub fn render_chart(chart: &ChartData, palette: &Palette) -> Rendered {
    let trend = chart.config().trend.as_ref();

    let (body, trend) = match chart.kind() {
        ChartKind::Unknown(_) => return Rendered::Nothing,
        ChartKind::Tabular => (
            ViewBody::Table(table::render_table(chart)),
            trend.map(TrendIndicator::for_table),
        ),
        ChartKind::Pie => (
            ViewBody::Pie(pie::render_pie(chart, palette)),
            trend.map(TrendIndicator::for_chart),
        ),
        kind @ (ChartKind::Bar
        | ChartKind::MultiBar
        | ChartKind::Line
        | ChartKind::Area
        | ChartKind::StackedArea) => {
            let Some(style) = SeriesStyle::for_kind(kind) else {
                return Rendered::Nothing;
            };
            (
                ViewBody::Series(series::render_series(chart, palette, style)),
                trend.map(TrendIndicator::for_chart),
            )
        }
    };

    let config = chart.config();
    Rendered::View(Box::new(ChartView {
        chart_type: chart.kind().clone(),
        title: config.title.clone(),
        description: config.description.clone(),
        body,
        trend,
        footer: config.footer.clone().filter(|footer| !footer.is_empty()),
    }))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
