use std::fmt::Write;

use crate::chart::{ColumnAlign, TrendDirection};
use crate::error::Result;
use crate::export::CsvExport;
use crate::render::{ChartView, ResolvedColumn, TableView, TrendIndicator, ViewBody};

use super::html_template::{HTML_FOOTER, HTML_HEADER};
use super::svg::{ChartSize, chart_svg, html_escape};
use super::{OutputFormatter, RenderedItem};

const DEFAULT_TITLE: &str = "Financial Charts";

pub struct HtmlFormatter {
    title: String,
    size: ChartSize,
}

impl HtmlFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            size: ChartSize::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: ChartSize) -> Self {
        self.size = size;
        self
    }

    fn write_item(&self, output: &mut String, item: &RenderedItem) {
        output.push_str("        <section class=\"chart-card\">\n");

        if let Some(view) = item.view() {
            match &view.body {
                ViewBody::Table(table) => write_table_card(output, view, table, item.export.as_ref()),
                ViewBody::Series(_) | ViewBody::Pie(_) => {
                    let svg = chart_svg(view, self.size).build();
                    for line in svg.lines() {
                        let _ = writeln!(output, "            {line}");
                    }
                }
            }
        } else if let Some(message) = item.error() {
            let _ = writeln!(
                output,
                r#"            <div class="chart-error" role="alert">{}</div>"#,
                html_escape(message)
            );
        }

        output.push_str("        </section>\n");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, items: &[RenderedItem]) -> Result<String> {
        let title = html_escape(&self.title);
        let mut output = HTML_HEADER.replace("{{TITLE}}", &title);
        let _ = writeln!(output, "        <h1>{title}</h1>");

        let visible: Vec<_> = items.iter().filter(|item| !item.is_empty()).collect();
        if visible.is_empty() {
            output.push_str("        <div class=\"no-results\">No charts to display</div>\n");
        }
        for item in visible {
            self.write_item(&mut output, item);
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

const fn align_class(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => "align-left",
        ColumnAlign::Center => "align-center",
        ColumnAlign::Right => "align-right",
    }
}

fn write_table_card(
    output: &mut String,
    view: &ChartView,
    table: &TableView,
    export: Option<&CsvExport>,
) {
    if table.exportable {
        output.push_str("            <div class=\"card-header\">\n                <div>\n");
        if !view.title.is_empty() {
            let _ = writeln!(output, "                    <h2>{}</h2>", html_escape(&view.title));
        }
        if !view.description.is_empty() {
            let _ = writeln!(
                output,
                r#"                    <p class="description">{}</p>"#,
                html_escape(&view.description)
            );
        }
        output.push_str("                </div>\n");
        if let Some(export) = export {
            let _ = writeln!(
                output,
                r#"                <a class="export-btn" href="{}" download="{}">Export CSV</a>"#,
                data_uri(export),
                html_escape(&export.filename)
            );
        }
        output.push_str("            </div>\n");
    }

    output.push_str("            <div class=\"table-container\">\n                <table>\n");
    write_table_head(output, &table.columns);
    output.push_str("                    <tbody>\n");
    for row in &table.rows {
        output.push_str("                        <tr>");
        for (column, cell) in table.columns.iter().zip(row) {
            let title = if cell.truncated {
                format!(r#" title="{}""#, html_escape(&cell.full))
            } else {
                String::new()
            };
            let style = column
                .color
                .as_ref()
                .map(|color| format!(r#" style="color: {}""#, html_escape(color)))
                .unwrap_or_default();
            let _ = write!(
                output,
                r#"<td class="{}"{title}{style}>{}</td>"#,
                align_class(column.align),
                html_escape(&cell.display)
            );
        }
        output.push_str("</tr>\n");
    }
    output.push_str("                    </tbody>\n                </table>\n            </div>\n");

    if let Some(trend) = &view.trend {
        write_trend(output, trend);
    }
    if let Some(footer) = &view.footer {
        let _ = writeln!(output, r#"            <p class="caption">{}</p>"#, html_escape(footer));
    }
}

fn write_table_head(output: &mut String, columns: &[ResolvedColumn]) {
    output.push_str("                    <thead>\n                        <tr>");
    for column in columns {
        let style = column
            .width
            .as_ref()
            .map(|width| format!(r#" style="width: {}""#, html_escape(width)))
            .unwrap_or_default();
        let _ = write!(
            output,
            r#"<th class="{}"{style}>{}</th>"#,
            align_class(column.align),
            html_escape(&column.label)
        );
    }
    output.push_str("</tr>\n                    </thead>\n");
}

fn write_trend(output: &mut String, trend: &TrendIndicator) {
    let class = match trend.direction {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
    };
    let _ = writeln!(
        output,
        r#"            <p class="trend {class}">{} {}</p>"#,
        trend.arrow(),
        html_escape(&trend.text)
    );
}

/// `data:` URI carrying the CSV body, percent-encoded.
fn data_uri(export: &CsvExport) -> String {
    format!("data:{},{}", export.mime, percent_encode(&export.content))
}

fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
