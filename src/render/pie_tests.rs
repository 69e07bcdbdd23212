use serde_json::json;

use super::*;

fn pie(data: serde_json::Value) -> ChartData {
    serde_json::from_value(json!({
        "chartType": "pie",
        "config": { "title": "Mix", "totalLabel": "Visitors" },
        "data": data
    }))
    .unwrap()
}

#[test]
fn total_is_sum_of_values() {
    let view = render_pie(
        &pie(json!([
            { "segment": "Chrome", "value": 275 },
            { "segment": "Safari", "value": 200 },
            { "segment": "Other", "value": 1025 }
        ])),
        &Palette::default(),
    );
    assert!((view.total - 1500.0).abs() < f64::EPSILON);
    assert_eq!(view.total_display, "1,500");
    assert_eq!(view.total_label.as_deref(), Some("Visitors"));
}

#[test]
fn missing_and_null_values_count_as_zero() {
    let view = render_pie(
        &pie(json!([
            { "segment": "A", "value": 10 },
            { "segment": "B", "value": null },
            { "segment": "C" },
            { "segment": "D", "value": "oops" }
        ])),
        &Palette::default(),
    );
    assert!((view.total - 10.0).abs() < f64::EPSILON);
    assert!((view.slices[0].fraction - 1.0).abs() < f64::EPSILON);
    assert!(view.slices[1].value.abs() < f64::EPSILON);
}

#[test]
fn colors_wrap_around_palette() {
    let palette = Palette::new(vec!["a".to_string(), "b".to_string()]);
    let view = render_pie(
        &pie(json!([
            { "segment": "1", "value": 1 },
            { "segment": "2", "value": 1 },
            { "segment": "3", "value": 1 }
        ])),
        &palette,
    );
    let colors: Vec<_> = view.slices.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["a", "b", "a"]);
}

#[test]
fn zero_total_has_zero_fractions() {
    let view = render_pie(&pie(json!([{ "segment": "A", "value": 0 }])), &Palette::default());
    assert!(view.slices[0].fraction.abs() < f64::EPSILON);
    assert_eq!(view.total_display, "0");
}

#[test]
fn empty_pie() {
    let view = render_pie(&pie(json!([])), &Palette::default());
    assert!(view.slices.is_empty());
    assert!(view.total.abs() < f64::EPSILON);
}
