//! Integration tests for the `render` command.

mod common;

use common::{ACME_TABLE, BUDGET_TABLE, EXPENSE_PIE, REVENUE_BAR, TRANSCRIPT, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Text Output
// =============================================================================

#[test]
fn render_text_groups_inferred_numbers() {
    let fixture = TestFixture::new();
    fixture.create_file("acme.json", ACME_TABLE);

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "render", "acme.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme, Inc."))
        .stdout(predicate::str::contains("1,500,000"))
        .stdout(predicate::str::contains("1500000").not());
}

#[test]
fn render_text_bar_chart_with_trend() {
    let fixture = TestFixture::new();
    fixture.create_file("revenue.json", REVENUE_BAR);

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "render", "revenue.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Revenue"))
        .stdout(predicate::str::contains("Jan"))
        .stdout(predicate::str::contains("Trending up by 5.2% this period"))
        .stdout(predicate::str::contains("Source: ledger"));
}

#[test]
fn render_directory_walks_json_documents() {
    let fixture = TestFixture::new();
    fixture.create_file("charts/a_revenue.json", REVENUE_BAR);
    fixture.create_file("charts/nested/b_expenses.json", EXPENSE_PIE);
    fixture.create_file("charts/notes.txt", "not a chart");

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "charts", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 2"))
        .stdout(predicate::str::contains("Monthly Revenue"))
        .stdout(predicate::str::contains("Expenses"));
}

#[test]
fn render_transcript_lists_newest_chart_first() {
    let fixture = TestFixture::new();
    fixture.create_file("chat.json", TRANSCRIPT);

    let output = finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "chat.json", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let budget = stdout.find("chat.json#m4").unwrap();
    let expenses = stdout.find("chat.json#m2").unwrap();
    assert!(budget < expenses);
}

#[test]
fn render_malformed_chart_is_reported_inline() {
    let fixture = TestFixture::new();
    fixture.create_file("bad.json", r#"{ "chartType": "bar", "data": 5 }"#);
    fixture.create_file("good.json", EXPENSE_PIE);

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "bad.json", "good.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"failed\": 1"))
        .stdout(predicate::str::contains("\"rendered\": 1"));
}

// =============================================================================
// Document Formats
// =============================================================================

#[test]
fn render_svg_to_file() {
    let fixture = TestFixture::new();
    fixture.create_file("revenue.json", REVENUE_BAR);

    finchart!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "render",
            "revenue.json",
            "--format",
            "svg",
            "--width",
            "800",
            "--output",
            "out/revenue.svg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let svg = fixture.read_file("out/revenue.svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Monthly Revenue"));
    assert!(svg.contains("800"));
}

#[test]
fn render_html_embeds_csv_export_link() {
    let fixture = TestFixture::new();
    fixture.create_file("budget.json", BUDGET_TABLE);

    finchart!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "render",
            "budget.json",
            "--format",
            "html",
            "--title",
            "My Budget",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>My Budget</title>"))
        .stdout(predicate::str::contains("download=\"Budget.csv\""))
        .stdout(predicate::str::contains("$1,200.00"))
        .stdout(predicate::str::contains("Updated monthly"));
}

#[test]
fn render_markdown_table() {
    let fixture = TestFixture::new();
    fixture.create_file("budget.json", BUDGET_TABLE);

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "budget.json", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Budget"))
        .stdout(predicate::str::contains("| Item | Amount |"))
        .stdout(predicate::str::contains("_Updated monthly_"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn render_hides_table_footer_from_config() {
    let fixture = TestFixture::new();
    fixture.create_file("budget.json", BUDGET_TABLE);
    fixture.create_config("version = \"1\"\n\n[table]\nshow_footer = false\n");

    finchart!()
        .current_dir(fixture.path())
        .args(["--color", "never", "render", "budget.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget"))
        .stdout(predicate::str::contains("Updated monthly").not());
}

#[test]
fn render_with_explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("revenue.json", REVENUE_BAR);
    fixture.create_file("conf/custom.toml", "[render]\nwidth = 1024\n");

    finchart!()
        .current_dir(fixture.path())
        .args(["-c", "conf/custom.toml", "render", "revenue.json", "--format", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1024"));
}

#[test]
fn render_rejects_unsupported_config_version() {
    let fixture = TestFixture::new();
    fixture.create_file("revenue.json", REVENUE_BAR);
    fixture.create_config("version = \"9\"\n");

    finchart!()
        .current_dir(fixture.path())
        .args(["render", "revenue.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("version"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn render_missing_path_is_an_error() {
    let fixture = TestFixture::new();

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "missing.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn render_invalid_json_is_an_error() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.json", "{ not json");

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "broken.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn render_rejects_non_positive_width() {
    let fixture = TestFixture::new();
    fixture.create_file("revenue.json", REVENUE_BAR);

    finchart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "revenue.json", "--width", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn render_requires_a_path() {
    finchart!().args(["render"]).assert().failure();
}
