use std::fmt::Write;

use crate::chart::{ColumnAlign, TrendDirection};
use crate::error::Result;
use crate::format::{format_number, format_percentage};
use crate::render::{ChartView, PieView, SeriesStyle, SeriesView, TableView, ViewBody};

use super::{ColorMode, OutputFormatter, RenderedItem, ansi, stdout_supports_color};

const BAR_WIDTH: usize = 30;
const BAR_CHAR: char = '█';

/// Terminal rendering with block bars and aligned tables.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: stdout_supports_color(mode),
            verbose,
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_view(&self, output: &mut String, view: &ChartView) {
        let _ = writeln!(output, "{}", self.paint(ansi::BOLD, &view.title));
        if !view.description.is_empty() {
            let _ = writeln!(output, "{}", self.paint(ansi::DIM, &view.description));
        }
        output.push('\n');

        match &view.body {
            ViewBody::Series(series) => format_series(output, series),
            ViewBody::Pie(pie) => format_pie(output, pie),
            ViewBody::Table(table) => format_table(output, table),
        }

        if view.trend.is_some() || view.footer.is_some() {
            output.push('\n');
        }
        if let Some(trend) = &view.trend {
            let color = match trend.direction {
                TrendDirection::Up => ansi::GREEN,
                TrendDirection::Down => ansi::RED,
            };
            let line = format!("{} {}", trend.arrow(), trend.text);
            let _ = writeln!(output, "{}", self.paint(color, &line));
        }
        if let Some(footer) = &view.footer {
            let _ = writeln!(output, "{}", self.paint(ansi::DIM, footer));
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, items: &[RenderedItem]) -> Result<String> {
        let mut blocks = Vec::new();

        for item in items.iter().filter(|item| !item.is_empty()) {
            let mut block = String::new();
            if self.verbose > 0 {
                let _ = writeln!(block, "{}", self.paint(ansi::DIM, &format!("── {}", item.source)));
            }
            if let Some(view) = item.view() {
                self.format_view(&mut block, view);
            } else if let Some(message) = item.error() {
                let _ = writeln!(block, "{}", self.paint(ansi::RED, &format!("✖ {message}")));
            }
            blocks.push(block);
        }

        Ok(blocks.join("\n"))
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    std::iter::repeat_n(BAR_CHAR, len.max(1)).collect()
}

fn width_of<'a>(texts: impl Iterator<Item = &'a str>) -> usize {
    texts.map(|t| t.chars().count()).max().unwrap_or(0)
}

fn format_series(output: &mut String, view: &SeriesView) {
    if view.categories.is_empty() || view.series.is_empty() {
        let _ = writeln!(output, "  No data available");
        return;
    }

    let show_labels = view.style != SeriesStyle::Bar;
    if show_labels {
        let legend: Vec<_> = view.series.iter().map(|s| format!("■ {}", s.label)).collect();
        let _ = writeln!(output, "  {}\n", legend.join("  "));
    }

    let max = view.max_value();
    let category_width = width_of(view.categories.iter().map(|c| c.label.as_str()));
    let label_width = width_of(view.series.iter().map(|s| s.label.as_str()));

    for (i, category) in view.categories.iter().enumerate() {
        let mut running = 0.0;
        for (j, series) in view.series.iter().enumerate() {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            running += value;
            let name = if j == 0 { category.label.as_str() } else { "" };
            let _ = write!(output, "  {name:<category_width$}  ");
            if show_labels {
                let _ = write!(output, "{:<label_width$}  ", series.label);
            }
            let drawn = if view.style.is_stacked() { running } else { value };
            let _ = writeln!(output, "{:<BAR_WIDTH$} {}", bar(drawn, max), format_number(value));
        }
    }
}

fn format_pie(output: &mut String, view: &PieView) {
    if view.slices.is_empty() {
        let _ = writeln!(output, "  No data available");
        return;
    }

    let segment_width = width_of(view.slices.iter().map(|s| s.segment.as_str()));
    let max = view.slices.iter().map(|s| s.value).fold(0.0, f64::max);
    for slice in &view.slices {
        let _ = writeln!(
            output,
            "  {:<segment_width$}  {:<BAR_WIDTH$} {} ({})",
            slice.segment,
            bar(slice.value, max),
            format_number(slice.value),
            format_percentage(slice.fraction)
        );
    }

    let _ = write!(output, "\n  Total: {}", view.total_display);
    if let Some(label) = &view.total_label {
        let _ = write!(output, " {label}");
    }
    output.push('\n');
}

fn pad(text: &str, width: usize, align: ColumnAlign) -> String {
    match align {
        ColumnAlign::Left => format!("{text:<width$}"),
        ColumnAlign::Center => format!("{text:^width$}"),
        ColumnAlign::Right => format!("{text:>width$}"),
    }
}

fn format_table(output: &mut String, view: &TableView) {
    if view.columns.is_empty() {
        let _ = writeln!(output, "  No data available");
        return;
    }

    let widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let cells = view.rows.iter().filter_map(|row| row.get(i)).map(|c| c.display.as_str());
            width_of(cells).max(column.label.chars().count())
        })
        .collect();

    let header: Vec<_> = view
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&column.label, *width, column.align))
        .collect();
    let _ = writeln!(output, "  {}", header.join("  ").trim_end());

    let rule: Vec<_> = widths.iter().map(|w| "─".repeat(*w)).collect();
    let _ = writeln!(output, "  {}", rule.join("  "));

    for row in &view.rows {
        let cells: Vec<_> = view
            .columns
            .iter()
            .zip(&widths)
            .zip(row)
            .map(|((column, width), cell)| pad(&cell.display, *width, column.align))
            .collect();
        let _ = writeln!(output, "  {}", cells.join("  ").trim_end());
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
