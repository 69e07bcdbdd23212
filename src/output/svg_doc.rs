use crate::error::Result;

use super::svg::{ChartSize, SvgBuilder, chart_svg, error_svg};
use super::{OutputFormatter, RenderedItem};

/// Gap between charts stacked in one document.
const STACK_GAP: f64 = 24.0;

/// Colors behind the `var(--color-*)` references in chart documents.
const SVG_STYLE: &str = "<style>
    :root {
        --color-card: #ffffff;
        --color-border: #e2e8f0;
        --color-text: #1e293b;
        --color-text-muted: #64748b;
        --color-trend-up: #16a34a;
        --color-trend-down: #dc2626;
        --color-error: #b91c1c;
    }
    text { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
</style>";

/// Standalone SVG output. Several charts are stacked vertically.
pub struct SvgFormatter {
    size: ChartSize,
}

impl SvgFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: ChartSize::default(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: ChartSize) -> Self {
        self.size = size;
        self
    }

    fn panel(&self, item: &RenderedItem) -> SvgBuilder {
        match (item.view(), item.error()) {
            (Some(view), _) => chart_svg(view, self.size),
            (None, Some(message)) => error_svg(message, self.size),
            (None, None) => error_svg("No chart to display", self.size),
        }
    }
}

impl Default for SvgFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for SvgFormatter {
    fn format(&self, items: &[RenderedItem]) -> Result<String> {
        let panels: Vec<SvgBuilder> = items
            .iter()
            .filter(|item| !item.is_empty())
            .map(|item| self.panel(item))
            .collect();

        let document = match panels.len() {
            0 => SvgBuilder::new(self.size.width, self.size.height)
                .with_title("No charts")
                .push_raw(SVG_STYLE),
            1 => panels
                .into_iter()
                .next()
                .map_or_else(SvgBuilder::default, |panel| panel.push_raw(SVG_STYLE)),
            _ => stack(panels, self.size.width),
        };

        Ok(document.build())
    }
}

fn stack(panels: Vec<SvgBuilder>, width: f64) -> SvgBuilder {
    #[allow(clippy::cast_precision_loss)]
    let gaps = (panels.len() - 1) as f64 * STACK_GAP;
    let height = panels.iter().map(SvgBuilder::height).sum::<f64>() + gaps;

    let mut document = SvgBuilder::new(width, height)
        .with_title("Charts")
        .push_raw(SVG_STYLE);
    let mut y = 0.0;
    for panel in panels {
        let panel_height = panel.height();
        document = document.push_raw(panel.with_position(0.0, y).build());
        y += panel_height + STACK_GAP;
    }
    document
}

#[cfg(test)]
#[path = "svg_doc_tests.rs"]
mod tests;
