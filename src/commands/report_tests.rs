use std::fs;

use clap::Parser;
use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn pie(title: &str) -> serde_json::Value {
    json!({
        "chartType": "pie",
        "config": { "title": title, "description": "" },
        "data": [{ "segment": "A", "value": 1 }],
        "chartConfig": {}
    })
}

fn run(dir: &TempDir, transcript: &serde_json::Value) -> Result<String> {
    let input = dir.path().join("chat.json");
    fs::write(&input, transcript.to_string()).unwrap();
    let out = dir.path().join("report.html");

    let input_str = input.display().to_string();
    let out_str = out.display().to_string();
    let cli = Cli::parse_from([
        "finchart", "--no-config", "--quiet", "report", &input_str, "-o", &out_str,
    ]);
    let Commands::Report(args) = &cli.command else {
        panic!("Expected Report command");
    };
    run_report_impl(args, &cli)?;
    Ok(fs::read_to_string(out).unwrap())
}

#[test]
fn charts_are_newest_first() {
    let dir = TempDir::new().unwrap();
    let html = run(
        &dir,
        &json!([
            { "id": "1", "role": "assistant", "content": "", "chartData": pie("First answer") },
            { "id": "2", "role": "user", "content": "and now?" },
            { "id": "3", "role": "assistant", "content": "", "chartData": pie("Second answer") }
        ]),
    )
    .unwrap();

    let first = html.find("Second answer").unwrap();
    let second = html.find("First answer").unwrap();
    assert!(first < second);
    assert!(html.contains("<title>Chart Report</title>"));
}

#[test]
fn malformed_chart_is_inline_error() {
    let dir = TempDir::new().unwrap();
    let html = run(
        &dir,
        &json!({ "messages": [
            { "id": "1", "role": "assistant", "content": "", "chartData": { "chartType": "bar", "data": "x" } }
        ]}),
    )
    .unwrap();

    assert!(html.contains("Error rendering chart: "));
}

#[test]
fn non_transcript_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir, &pie("Lonely")).unwrap_err();
    assert!(err.to_string().contains("is not a transcript"));
}
