use serde_json::{Value, json};

use super::*;
use crate::render::{BoundaryOutcome, Palette};

fn item(payload: &Value) -> RenderedItem {
    RenderedItem::render("chart.json", payload, &Palette::default())
}

fn expenses_table() -> Value {
    json!({
        "chartType": "tabular",
        "config": {
            "title": "Q1 Expenses",
            "description": "By category",
            "footer": "Figures in USD",
            "trend": { "percentage": 2.5, "direction": "down" },
            "columns": [
                { "key": "category", "label": "Category" },
                { "key": "amount", "label": "Amount", "format": "currency" }
            ]
        },
        "data": [
            { "category": "Rent, office", "amount": 1200 },
            { "category": "An unusually long category name here", "amount": 42 }
        ],
        "chartConfig": { "amount": { "align": "right", "width": "8rem" } }
    })
}

#[test]
fn document_frame_and_title() {
    let output = HtmlFormatter::new().with_title("Board <Pack>").format(&[]).unwrap();

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<title>Board &lt;Pack&gt;</title>"));
    assert!(output.contains("<h1>Board &lt;Pack&gt;</h1>"));
    assert!(output.contains("--color-trend-up"));
    assert!(output.contains("No charts to display"));
    assert!(output.trim_end().ends_with("</html>"));
}

#[test]
fn table_card_has_header_export_and_caption() {
    let output = HtmlFormatter::new().format(&[item(&expenses_table())]).unwrap();

    assert!(output.contains("<h2>Q1 Expenses</h2>"));
    assert!(output.contains(r#"<p class="description">By category</p>"#));
    assert!(output.contains(r#"download="Q1 Expenses.csv""#));
    assert!(output.contains("href=\"data:text/csv;charset=utf-8,Category%2CAmount%0A%22Rent%2C%20office%22%2C%22%241%2C200.00%22"));
    assert!(output.contains(r#"<th class="align-right" style="width: 8rem">Amount</th>"#));
    assert!(output.contains(r#"<td class="align-right">$1,200.00</td>"#));
    assert!(output.contains(r#"<p class="trend down">↓ Trending down by 2.5%</p>"#));
    assert!(output.contains(r#"<p class="caption">Figures in USD</p>"#));
}

#[test]
fn truncated_cells_keep_full_text_as_title() {
    let output = HtmlFormatter::new().format(&[item(&expenses_table())]).unwrap();
    assert!(output.contains(
        r#"title="An unusually long category name here">An unusually long category ...</td>"#
    ));
}

#[test]
fn untitled_table_has_no_header_or_export() {
    let mut payload = expenses_table();
    payload["config"]["title"] = json!("");
    payload["config"]["description"] = json!("");

    let output = HtmlFormatter::new().format(&[item(&payload)]).unwrap();
    assert!(!output.contains("card-header\">"));
    assert!(!output.contains("Export CSV"));
    assert!(output.contains("<table>"));
}

#[test]
fn charts_embed_svg() {
    let payload = json!({
        "chartType": "line",
        "config": { "title": "Cash", "description": "", "xAxisKey": "m" },
        "data": [{ "m": "Jan", "cash": 10 }, { "m": "Feb", "cash": 12 }],
        "chartConfig": { "cash": { "label": "Cash" } }
    });
    let output = HtmlFormatter::new().format(&[item(&payload)]).unwrap();

    assert!(output.contains("<svg viewBox=\"0 0 640 320\""));
    assert!(!output.contains("Export CSV"));
}

#[test]
fn failures_render_inline() {
    let failed = RenderedItem::new("bad.json", BoundaryOutcome::failure("<bad>"));
    let output = HtmlFormatter::new().format(&[failed]).unwrap();
    assert!(output.contains(
        r#"<div class="chart-error" role="alert">Error rendering chart: &lt;bad&gt;</div>"#
    ));
}

#[test]
fn percent_encoding_keeps_unreserved() {
    assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(percent_encode("a b\n\"é\""), "a%20b%0A%22%C3%A9%22");
}
