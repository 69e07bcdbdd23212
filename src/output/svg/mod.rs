//! SVG chart generation.
//!
//! Provides building blocks for accessible, responsive SVG charts:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration for theme colors (`var(--color-*)`)
//! - `<title>` elements for screen readers and hover tooltips

mod builder;
mod chart;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use chart::{ChartSize, chart_svg, error_svg};
pub use element::{Axis, AxisOrientation, Band, Bar, Label, Line, Slice, SvgElement};
pub use format::{compact_number, html_escape};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
