use serde_json::json;

use super::*;

#[test]
fn valid_payload_renders() {
    let payload = json!({
        "chartType": "pie",
        "config": { "title": "Mix" },
        "data": [{ "segment": "A", "value": 1 }]
    });
    let outcome = render_boundary(&payload, &Palette::default());
    assert!(matches!(outcome, BoundaryOutcome::Rendered(Rendered::View(_))));
}

#[test]
fn unknown_type_renders_nothing_without_error() {
    let payload = json!({ "chartType": "radar", "config": { "title": "x" } });
    assert_eq!(
        render_boundary(&payload, &Palette::default()),
        BoundaryOutcome::Rendered(Rendered::Nothing)
    );
}

#[test]
fn non_string_type_renders_nothing() {
    for chart_type in [json!(5), json!(null), json!(["bar"])] {
        let payload = json!({ "chartType": chart_type, "config": { "title": "x" }, "data": [] });
        assert_eq!(
            render_boundary(&payload, &Palette::default()),
            BoundaryOutcome::Rendered(Rendered::Nothing)
        );
    }
}

#[test]
fn malformed_payload_becomes_inline_message() {
    let payload = json!({ "chartType": "bar", "data": "not rows" });
    let BoundaryOutcome::Failed(message) = render_boundary(&payload, &Palette::default()) else {
        panic!("expected failure");
    };
    assert!(message.starts_with("Error rendering chart: "));
}

#[test]
fn missing_chart_type_fails() {
    let outcome = render_boundary(&json!({ "config": {} }), &Palette::default());
    assert!(matches!(outcome, BoundaryOutcome::Failed(m) if m.contains("chartType")));
}

#[test]
fn failure_helper_prefixes_message() {
    assert_eq!(
        BoundaryOutcome::failure("backend timed out"),
        BoundaryOutcome::Failed("Error rendering chart: backend timed out".to_string())
    );
}

#[test]
fn render_payload_hands_back_parsed_chart() {
    let payload = json!({
        "chartType": "tabular",
        "config": { "title": "Revenue" },
        "data": [{ "name": "Acme", "revenue": "1500000" }]
    });
    let (chart, rendered) = render_payload(&payload, &Palette::default()).unwrap();
    assert_eq!(chart.config().title, "Revenue");
    assert_eq!(chart.inferred_format("revenue"), Some(crate::chart::DataFormat::Number));
    assert!(rendered.view().is_some());
}

#[test]
fn render_payload_reports_contract_errors() {
    let payload = json!({ "chartType": "bar", "data": 5 });
    assert!(render_payload(&payload, &Palette::default()).is_err());
}
