use serde::Serialize;

use crate::error::Result;
use crate::render::ChartView;

use super::{OutputFormatter, RenderedItem};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    charts: Vec<ChartResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    rendered: usize,
    empty: usize,
    failed: usize,
}

#[derive(Serialize)]
struct ChartResult<'a> {
    source: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<&'a ChartView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, items: &[RenderedItem]) -> Result<String> {
        let charts: Vec<ChartResult<'_>> = items.iter().map(convert_item).collect();
        let (rendered, empty, failed) =
            charts
                .iter()
                .fold((0, 0, 0), |(r, e, f), chart| match chart.status {
                    "rendered" => (r + 1, e, f),
                    "empty" => (r, e + 1, f),
                    _ => (r, e, f + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total: items.len(),
                rendered,
                empty,
                failed,
            },
            charts,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_item(item: &RenderedItem) -> ChartResult<'_> {
    let status = if item.error().is_some() {
        "error"
    } else if item.is_empty() {
        "empty"
    } else {
        "rendered"
    };

    ChartResult {
        source: &item.source,
        status,
        view: item.view(),
        error: item.error(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
