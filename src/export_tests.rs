use serde_json::json;

use super::*;

fn chart(value: serde_json::Value) -> ChartData {
    serde_json::from_value(value).unwrap()
}

#[test]
fn comma_values_are_quoted() {
    let chart = chart(json!({
        "chartType": "tabular",
        "config": { "title": "t" },
        "data": [{ "a": 1, "b": "x,y" }]
    }));
    let csv = csv_content(&chart);
    let lines: Vec<_> = csv.split('\n').collect();
    assert_eq!(lines, vec!["A,B", "1,\"x,y\""]);
}

#[test]
fn end_to_end_customer_export() {
    let chart = chart(json!({
        "chartType": "tabular",
        "config": { "title": "Top customers", "description": "" },
        "data": [{ "name": "Acme, Inc.", "revenue": 1500000 }]
    }));
    let export = export_csv(&chart);
    assert_eq!(export.filename, "Top customers.csv");
    assert_eq!(export.mime, "text/csv;charset=utf-8");
    assert_eq!(export.content, "Name,Revenue\n\"Acme, Inc.\",1500000");
}

#[test]
fn declared_formats_apply_in_csv() {
    let chart = chart(json!({
        "chartType": "tabular",
        "config": {
            "title": "t",
            "columns": [
                { "key": "amount", "label": "Amount", "format": "currency" },
                { "key": "share", "label": "Share", "format": "percentage" }
            ]
        },
        "data": [{ "amount": 1234.5, "share": 0.4567 }]
    }));
    assert_eq!(
        csv_content(&chart),
        "Amount,Share\n\"$1,234.50\",45.67%"
    );
}

#[test]
fn csv_is_never_truncated() {
    let long = "x".repeat(80);
    let chart = chart(json!({
        "chartType": "tabular",
        "config": { "title": "t" },
        "data": [{ "note": long }]
    }));
    assert!(csv_content(&chart).ends_with(&long));
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(csv_escape("say \"hi\", ok"), "\"say \"\"hi\"\", ok\"");
    assert_eq!(csv_escape("plain"), "plain");
}

#[test]
fn no_trailing_newline_and_null_is_empty() {
    let chart = chart(json!({
        "chartType": "tabular",
        "config": { "title": "t" },
        "data": [{ "a": null, "b": 2 }, { "a": "z", "b": 3 }]
    }));
    assert_eq!(csv_content(&chart), "A,B\n,2\nz,3");
}

#[test]
fn filename_rules() {
    assert_eq!(export_filename(""), "export.csv");
    assert_eq!(export_filename("   "), "export.csv");
    assert_eq!(export_filename("Q1/Q2 revenue"), "Q1_Q2 revenue.csv");
    assert_eq!(export_filename(".."), "export.csv");
}

#[test]
fn write_download_creates_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("exports");
    let export = CsvExport {
        filename: "Sales.csv".to_string(),
        content: "A\n1".to_string(),
        mime: CSV_MIME,
    };

    let path = write_download(&export, &dir).unwrap();
    assert_eq!(path, dir.join("Sales.csv"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "A\n1");
}
