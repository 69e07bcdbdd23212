//! Tests for SVG module exports.

use super::*;

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::css("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: AxisOrientation = AxisOrientation::Horizontal;
    let _: ChartSize = ChartSize::default();
}

#[test]
fn default_chart_size() {
    let size = ChartSize::default();
    assert!((size.width - 640.0).abs() < f64::EPSILON);
    assert!((size.height - 320.0).abs() < f64::EPSILON);
}
