use super::*;
use crate::render::Rendered;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
    assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_invalid() {
    let err = "pdf".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("Unknown output format"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn rendered_item_accessors() {
    let failed = RenderedItem::new("a.json", BoundaryOutcome::failure("boom"));
    assert_eq!(failed.error(), Some("Error rendering chart: boom"));
    assert!(failed.view().is_none());
    assert!(!failed.is_empty());

    let nothing = RenderedItem::new("b.json", BoundaryOutcome::Rendered(Rendered::Nothing));
    assert!(nothing.is_empty());
    assert!(nothing.error().is_none());
}

#[test]
fn color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

mod render_tests {
    use serde_json::json;

    use super::*;

    fn table(title: &str) -> Value {
        json!({
            "chartType": "tabular",
            "config": { "title": title, "description": "" },
            "data": [{ "name": "Rent", "amount": 1200 }],
            "chartConfig": {}
        })
    }

    #[test]
    fn exportable_table_carries_csv() {
        let item = RenderedItem::render("t.json", &table("Expenses"), &Palette::default());
        let export = item.export.unwrap();
        assert_eq!(export.filename, "Expenses.csv");
        assert_eq!(export.content, "Name,Amount\nRent,1200");
    }

    #[test]
    fn headerless_table_has_no_export() {
        let item = RenderedItem::render("t.json", &table(""), &Palette::default());
        assert!(item.view().is_some());
        assert!(item.export.is_none());
    }

    #[test]
    fn charts_have_no_export() {
        let payload = json!({
            "chartType": "pie",
            "config": { "title": "Mix", "description": "" },
            "data": [{ "segment": "A", "value": 1 }],
            "chartConfig": {}
        });
        let item = RenderedItem::render("p.json", &payload, &Palette::default());
        assert!(item.export.is_none());
    }

    #[test]
    fn malformed_payload_fails_inline() {
        let item = RenderedItem::render("bad.json", &json!({ "chartType": "bar", "data": 5 }), &Palette::default());
        assert!(item.error().unwrap().starts_with("Error rendering chart: "));
        assert!(item.export.is_none());
    }
}
