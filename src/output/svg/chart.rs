//! Composite charts: full SVG documents for rendered chart views.

use std::f64::consts::TAU;

use super::builder::SvgBuilder;
use super::element::{Axis, Band, Bar, Label, Line, Slice, SvgElement};
use super::format::{compact_number, html_escape};
use super::style::{ChartColor, TextAnchor};
use crate::chart::{ColumnAlign, TrendDirection};
use crate::format::format_number;
use crate::render::{ChartView, PieView, SeriesStyle, SeriesView, TableView, ViewBody};

const HEADER_HEIGHT: f64 = 60.0;
const FOOTER_LINE: f64 = 18.0;
const SIDE_PADDING: f64 = 16.0;
const Y_AXIS_GUTTER: f64 = 56.0;
const LEGEND_HEIGHT: f64 = 22.0;
const X_LABEL_HEIGHT: f64 = 24.0;
const Y_TICKS: usize = 4;
const TABLE_ROW_HEIGHT: f64 = 22.0;
const DONUT_INNER_RATIO: f64 = 0.6;

/// Pixel size of one chart document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
        }
    }
}

/// Vertical extent available to a chart body.
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    const fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Build the SVG document for a rendered chart.
///
/// Tables grow taller than `size.height` when their rows need the room.
#[must_use]
pub fn chart_svg(view: &ChartView, size: ChartSize) -> SvgBuilder {
    let footer_lines = usize::from(view.trend.is_some()) + usize::from(view.footer.is_some());
    #[allow(clippy::cast_precision_loss)]
    let footer_height = footer_lines as f64 * FOOTER_LINE + 8.0;

    let height = match &view.body {
        ViewBody::Table(table) => size.height.max(table_height(table) + HEADER_HEIGHT + footer_height),
        ViewBody::Series(_) | ViewBody::Pie(_) => size.height,
    };
    let frame = Frame {
        width: size.width,
        top: HEADER_HEIGHT,
        bottom: height - footer_height,
    };

    let mut builder = SvgBuilder::new(size.width, height).with_title(view.title.clone());
    builder = push_header(builder, view);

    builder = match &view.body {
        ViewBody::Series(series) => push_series(builder, series, frame),
        ViewBody::Pie(pie) => push_pie(builder, pie, frame),
        ViewBody::Table(table) => push_table(builder, table, frame),
    };

    push_footer(builder, view, height)
}

/// An SVG panel carrying an inline error message in place of a chart.
#[must_use]
pub fn error_svg(message: &str, size: ChartSize) -> SvgBuilder {
    let label = Label::new(size.width / 2.0, size.height / 2.0, message)
        .with_anchor(TextAnchor::Middle)
        .with_color(ChartColor::css_var("error"))
        .with_font_size(14.0);
    SvgBuilder::new(size.width, size.height)
        .with_title("Chart error")
        .push_element(&label)
}

fn push_header(builder: SvgBuilder, view: &ChartView) -> SvgBuilder {
    let title = Label::new(SIDE_PADDING, 24.0, view.title.clone())
        .with_font_size(16.0)
        .bold();
    let builder = builder.push_element(&title);
    if view.description.is_empty() {
        return builder;
    }
    let description = Label::new(SIDE_PADDING, 44.0, view.description.clone())
        .with_color(ChartColor::css_var("text-muted"));
    builder.push_element(&description)
}

fn push_footer(mut builder: SvgBuilder, view: &ChartView, height: f64) -> SvgBuilder {
    let mut y = height - 8.0;
    if let Some(footer) = &view.footer {
        let label =
            Label::new(SIDE_PADDING, y, footer.clone()).with_color(ChartColor::css_var("text-muted"));
        builder = builder.push_element(&label);
        y -= FOOTER_LINE;
    }
    if let Some(trend) = &view.trend {
        let color = match trend.direction {
            TrendDirection::Up => "trend-up",
            TrendDirection::Down => "trend-down",
        };
        let label = Label::new(SIDE_PADDING, y, format!("{} {}", trend.text, trend.arrow()))
            .with_color(ChartColor::css_var(color))
            .bold();
        builder = builder.push_element(&label);
    }
    builder
}

fn empty_state(builder: SvgBuilder, frame: Frame) -> SvgBuilder {
    let label = Label::new(frame.width / 2.0, frame.top + frame.height() / 2.0, "No data available")
        .with_anchor(TextAnchor::Middle)
        .with_color(ChartColor::css_var("text-muted"))
        .with_font_size(14.0);
    builder.push_element(&label)
}

/// Maps series values to plot coordinates.
struct Plot {
    left: f64,
    width: f64,
    top: f64,
    bottom: f64,
    min: f64,
    max: f64,
    categories: usize,
}

impl Plot {
    fn new(view: &SeriesView, frame: Frame) -> Self {
        let min = view.min_value();
        let mut max = view.max_value();
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        Self {
            left: Y_AXIS_GUTTER,
            width: frame.width - Y_AXIS_GUTTER - SIDE_PADDING,
            top: frame.top + LEGEND_HEIGHT,
            bottom: frame.bottom - X_LABEL_HEIGHT,
            min,
            max,
            categories: view.categories.len(),
        }
    }

    fn y(&self, value: f64) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        ratio.mul_add(-(self.bottom - self.top), self.bottom)
    }

    #[allow(clippy::cast_precision_loss)]
    fn band(&self) -> f64 {
        self.width / self.categories.max(1) as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn center(&self, index: usize) -> f64 {
        self.band().mul_add(index as f64 + 0.5, self.left)
    }
}

fn push_series(builder: SvgBuilder, view: &SeriesView, frame: Frame) -> SvgBuilder {
    if view.categories.is_empty() || view.series.is_empty() {
        return empty_state(builder, frame);
    }

    let plot = Plot::new(view, frame);
    let mut builder = push_legend(builder, view, frame.top);
    builder = push_axes(builder, view, &plot);

    match view.style {
        SeriesStyle::Bar | SeriesStyle::GroupedBar => push_bars(builder, view, &plot),
        SeriesStyle::Line | SeriesStyle::Area => push_lines(builder, view, &plot),
        SeriesStyle::StackedArea => push_stacked(builder, view, &plot),
    }
}

fn push_legend(mut builder: SvgBuilder, view: &SeriesView, top: f64) -> SvgBuilder {
    let mut x = Y_AXIS_GUTTER;
    for series in &view.series {
        builder = builder.push_raw(format!(
            r#"<rect x="{x}" y="{}" width="10" height="10" fill="{}" rx="2"/>"#,
            top + 2.0,
            html_escape(&series.color)
        ));
        let label = Label::new(x + 14.0, top + 11.0, series.label.clone())
            .with_color(ChartColor::css_var("text-muted"))
            .with_font_size(11.0);
        builder = builder.push_element(&label);
        #[allow(clippy::cast_precision_loss)]
        let advance = (series.label.chars().count() as f64).mul_add(6.5, 34.0);
        x += advance;
    }
    builder
}

#[allow(clippy::cast_precision_loss)]
fn push_axes(builder: SvgBuilder, view: &SeriesView, plot: &Plot) -> SvgBuilder {
    let y_labels = (0..=Y_TICKS)
        .map(|i| {
            let pos = i as f64 / Y_TICKS as f64;
            (pos, compact_number(pos.mul_add(plot.max - plot.min, plot.min)))
        })
        .collect();
    let y_axis = Axis::vertical(plot.left, plot.bottom, plot.bottom - plot.top).with_labels(y_labels);

    let count = view.categories.len() as f64;
    let x_labels = view
        .categories
        .iter()
        .enumerate()
        .map(|(i, tick)| ((i as f64 + 0.5) / count, tick.label.clone()))
        .collect();
    let x_axis = Axis::horizontal(plot.left, plot.y(0.0), plot.width).with_labels(x_labels);

    builder.push_element(&y_axis).push_element(&x_axis)
}

#[allow(clippy::cast_precision_loss)]
fn push_bars(mut builder: SvgBuilder, view: &SeriesView, plot: &Plot) -> SvgBuilder {
    let group = plot.band() * 0.8;
    let bar_width = group / view.series.len() as f64;
    let zero = plot.y(0.0);

    for (i, tick) in view.categories.iter().enumerate() {
        let group_left = plot.center(i) - group / 2.0;
        for (j, series) in view.series.iter().enumerate() {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let top = plot.y(value);
            let bar = Bar {
                x: bar_width.mul_add(j as f64, group_left),
                y: top.min(zero),
                width: bar_width,
                height: (top - zero).abs(),
                color: ChartColor::css(&series.color),
                label: format!("{} · {}", tick.full, series.label),
                value,
            };
            builder = builder.push_element(&bar);
        }
    }
    builder
}

fn push_lines(mut builder: SvgBuilder, view: &SeriesView, plot: &Plot) -> SvgBuilder {
    let baseline = plot.y(0.0);
    for series in &view.series {
        let points = series
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| (plot.center(i), plot.y(*value)))
            .collect();
        let mut line = Line::new(points, ChartColor::css(&series.color));
        if let Some(opacity) = view.style.fill_opacity() {
            line = line
                .with_fill(true)
                .with_fill_opacity(opacity)
                .with_baseline_y(baseline);
        }
        builder = builder.push_element(&line);
    }
    builder
}

fn push_stacked(mut builder: SvgBuilder, view: &SeriesView, plot: &Plot) -> SvgBuilder {
    let opacity = view.style.fill_opacity().unwrap_or(1.0);
    let mut running = vec![0.0_f64; view.categories.len()];

    for series in &view.series {
        let lower: Vec<(f64, f64)> = running
            .iter()
            .enumerate()
            .map(|(i, total)| (plot.center(i), plot.y(*total)))
            .collect();
        for (total, value) in running.iter_mut().zip(&series.values) {
            *total += value;
        }
        let upper = running
            .iter()
            .enumerate()
            .map(|(i, total)| (plot.center(i), plot.y(*total)))
            .collect();

        let band = Band {
            upper,
            lower,
            color: ChartColor::css(&series.color),
            fill_opacity: opacity,
            label: series.label.clone(),
        };
        builder = builder.push_element(&band);
    }
    builder
}

fn push_pie(mut builder: SvgBuilder, view: &PieView, frame: Frame) -> SvgBuilder {
    if view.slices.is_empty() || view.total <= 0.0 {
        return empty_state(builder, frame);
    }

    let cx = frame.width / 2.0;
    let cy = frame.top + frame.height() / 2.0;
    let radius = (frame.height().min(frame.width) / 2.0 - 8.0).max(10.0);

    let mut angle = 0.0;
    for slice in &view.slices {
        let sweep = slice.fraction * TAU;
        let element = Slice {
            cx,
            cy,
            radius,
            inner_radius: radius * DONUT_INNER_RATIO,
            start_angle: angle,
            end_angle: angle + sweep,
            color: ChartColor::css(&slice.color),
            label: format!("{}: {}", slice.segment, format_number(slice.value)),
        };
        builder = builder.push_element(&element);
        angle += sweep;
    }

    let total = Label::new(cx, cy + 6.0, view.total_display.clone())
        .with_anchor(TextAnchor::Middle)
        .with_font_size(24.0)
        .bold();
    builder = builder.push_element(&total);

    if let Some(total_label) = &view.total_label {
        let label = Label::new(cx, cy + 26.0, total_label.clone())
            .with_anchor(TextAnchor::Middle)
            .with_color(ChartColor::css_var("text-muted"));
        builder = builder.push_element(&label);
    }

    push_pie_legend(builder, view, frame)
}

fn push_pie_legend(mut builder: SvgBuilder, view: &PieView, frame: Frame) -> SvgBuilder {
    let mut y = frame.top + 8.0;
    for slice in &view.slices {
        if y > frame.bottom {
            break;
        }
        builder = builder.push_raw(format!(
            r#"<rect x="{SIDE_PADDING}" y="{y}" width="10" height="10" fill="{}" rx="2"/>"#,
            html_escape(&slice.color)
        ));
        let label = Label::new(SIDE_PADDING + 14.0, y + 9.0, slice.segment.clone())
            .with_color(ChartColor::css_var("text-muted"))
            .with_font_size(11.0);
        builder = builder.push_element(&label);
        y += 16.0;
    }
    builder
}

#[allow(clippy::cast_precision_loss)]
fn table_height(table: &TableView) -> f64 {
    (table.rows.len() as f64 + 1.0).mul_add(TABLE_ROW_HEIGHT, 8.0)
}

#[allow(clippy::cast_precision_loss)]
fn push_table(mut builder: SvgBuilder, table: &TableView, frame: Frame) -> SvgBuilder {
    if table.columns.is_empty() {
        return empty_state(builder, frame);
    }

    let column_width = (frame.width - 2.0 * SIDE_PADDING) / table.columns.len() as f64;
    let cell_x = |index: usize, align: ColumnAlign| {
        let left = column_width.mul_add(index as f64, SIDE_PADDING);
        match align {
            ColumnAlign::Left => (left + 6.0, TextAnchor::Start),
            ColumnAlign::Center => (left + column_width / 2.0, TextAnchor::Middle),
            ColumnAlign::Right => (left + column_width - 6.0, TextAnchor::End),
        }
    };

    let mut y = frame.top + 16.0;
    for (index, column) in table.columns.iter().enumerate() {
        let (x, anchor) = cell_x(index, column.align);
        let header = Label::new(x, y, column.label.clone())
            .with_anchor(anchor)
            .with_color(ChartColor::css_var("text-muted"))
            .bold();
        builder = builder.push_element(&header);
    }
    builder = builder.push_raw(format!(
        r#"<line x1="{SIDE_PADDING}" y1="{}" x2="{}" y2="{}" stroke="var(--color-border)" stroke-width="1"/>"#,
        y + 6.0,
        frame.width - SIDE_PADDING,
        y + 6.0
    ));

    for row in &table.rows {
        y += TABLE_ROW_HEIGHT;
        for (index, (column, cell)) in table.columns.iter().zip(row).enumerate() {
            let (x, anchor) = cell_x(index, column.align);
            let label = Label::new(x, y, cell.display.clone()).with_anchor(anchor);
            let mut text = label.render();
            if cell.truncated {
                // Full value as a hover tooltip
                text = text.replace(
                    "</text>",
                    &format!("<title>{}</title></text>", html_escape(&cell.full)),
                );
            }
            builder = builder.push_raw(text);
        }
    }
    builder
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
