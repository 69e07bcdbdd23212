use std::fmt::Write;

use crate::chart::{ColumnAlign, humanize_label};
use crate::error::Result;
use crate::format::{format_number, format_percentage};
use crate::render::{ChartView, PieView, SeriesView, TableView, ViewBody};

use super::{OutputFormatter, RenderedItem};

pub struct MarkdownFormatter {
    show_sources: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_sources: false,
        }
    }

    #[must_use]
    pub const fn with_sources(mut self, show: bool) -> Self {
        self.show_sources = show;
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, items: &[RenderedItem]) -> Result<String> {
        let mut blocks = Vec::new();

        for item in items.iter().filter(|item| !item.is_empty()) {
            let mut block = String::new();
            if let Some(view) = item.view() {
                format_view(&mut block, view);
            } else if let Some(message) = item.error() {
                let _ = writeln!(block, "> ❌ {}", escape_cell(message));
            }
            if self.show_sources {
                let _ = writeln!(block, "\n<sub>Source: `{}`</sub>", item.source);
            }
            blocks.push(block);
        }

        Ok(blocks.join("\n"))
    }
}

fn format_view(output: &mut String, view: &ChartView) {
    let _ = writeln!(output, "## {}\n", view.title);
    if !view.description.is_empty() {
        let _ = writeln!(output, "{}\n", view.description);
    }

    match &view.body {
        ViewBody::Series(series) => format_series(output, series),
        ViewBody::Pie(pie) => format_pie(output, pie),
        ViewBody::Table(table) => format_table(output, table),
    }

    if let Some(trend) = &view.trend {
        let _ = writeln!(output, "\n**{} {}**", trend.arrow(), trend.text);
    }
    if let Some(footer) = &view.footer {
        let _ = writeln!(output, "\n_{footer}_");
    }
}

/// Escape characters that would break a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

const fn align_marker(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => ":---",
        ColumnAlign::Center => ":---:",
        ColumnAlign::Right => "---:",
    }
}

fn write_row<I, S>(output: &mut String, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    output.push('|');
    for cell in cells {
        let _ = write!(output, " {} |", escape_cell(cell.as_ref()));
    }
    output.push('\n');
}

fn format_series(output: &mut String, view: &SeriesView) {
    if view.categories.is_empty() || view.series.is_empty() {
        let _ = writeln!(output, "_No data available_");
        return;
    }

    let axis = view.axis_key.as_deref().map(humanize_label).unwrap_or_default();
    write_row(output, std::iter::once(axis).chain(view.series.iter().map(|s| s.label.clone())));
    output.push_str("| :---");
    for _ in &view.series {
        output.push_str(" | ---:");
    }
    output.push_str(" |\n");

    for (i, category) in view.categories.iter().enumerate() {
        let values = view
            .series
            .iter()
            .map(|s| format_number(s.values.get(i).copied().unwrap_or(0.0)));
        write_row(output, std::iter::once(category.full.clone()).chain(values));
    }
}

fn format_pie(output: &mut String, view: &PieView) {
    if view.slices.is_empty() {
        let _ = writeln!(output, "_No data available_");
        return;
    }

    output.push_str("| Segment | Value | Share |\n| :--- | ---: | ---: |\n");
    for slice in &view.slices {
        write_row(
            output,
            [
                slice.segment.clone(),
                format_number(slice.value),
                format_percentage(slice.fraction),
            ],
        );
    }

    let _ = write!(output, "\n**Total:** {}", view.total_display);
    if let Some(label) = &view.total_label {
        let _ = write!(output, " {label}");
    }
    output.push('\n');
}

fn format_table(output: &mut String, view: &TableView) {
    if view.columns.is_empty() {
        let _ = writeln!(output, "_No data available_");
        return;
    }

    write_row(output, view.columns.iter().map(|c| c.label.as_str()));
    let markers: Vec<_> = view.columns.iter().map(|c| align_marker(c.align)).collect();
    let _ = writeln!(output, "| {} |", markers.join(" | "));

    for row in &view.rows {
        write_row(output, row.iter().map(|cell| cell.display.as_str()));
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
