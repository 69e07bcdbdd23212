#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the finchart binary.
#[macro_export]
macro_rules! finchart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("finchart"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates a `.finchart.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".finchart.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Untitled table whose columns come from the first row.
pub const ACME_TABLE: &str = r#"{
  "chartType": "tabular",
  "config": { "title": "" },
  "data": [{ "name": "Acme, Inc.", "revenue": 1500000 }]
}"#;

/// Monthly revenue bar chart.
pub const REVENUE_BAR: &str = r#"{
  "chartType": "bar",
  "config": {
    "title": "Monthly Revenue",
    "description": "First quarter",
    "xAxisKey": "month",
    "trend": { "percentage": 5.2, "direction": "up" },
    "footer": "Source: ledger"
  },
  "data": [
    { "month": "Jan", "revenue": 1200 },
    { "month": "Feb", "revenue": 1350 },
    { "month": "Mar", "revenue": 1500 }
  ],
  "chartConfig": {
    "revenue": { "label": "Revenue" }
  }
}"#;

/// Expense breakdown pie chart.
pub const EXPENSE_PIE: &str = r#"{
  "chartType": "pie",
  "config": { "title": "Expenses", "totalLabel": "Total spend" },
  "data": [
    { "segment": "Rent", "value": 1200 },
    { "segment": "Utilities", "value": 300 }
  ],
  "chartConfig": {}
}"#;

/// Titled budget table with declared columns and a footer.
pub const BUDGET_TABLE: &str = r#"{
  "chartType": "tabular",
  "config": {
    "title": "Budget",
    "description": "Household budget",
    "footer": "Updated monthly",
    "columns": [
      { "key": "item", "label": "Item" },
      { "key": "amount", "label": "Amount", "format": "currency" }
    ]
  },
  "data": [
    { "item": "Rent", "amount": 1200 },
    { "item": "Utilities", "amount": 85.5 }
  ],
  "chartConfig": {}
}"#;

/// Bar chart missing its axis key and series.
pub const BROKEN_BAR: &str = r#"{
  "chartType": "bar",
  "config": { "title": "Broken" },
  "data": [{ "month": "Jan", "revenue": 10 }],
  "chartConfig": {}
}"#;

/// Two-turn conversation with an older pie and a newer table.
pub const TRANSCRIPT: &str = r#"{
  "messages": [
    { "id": "m1", "role": "user", "content": "Break down my expenses" },
    {
      "id": "m2",
      "role": "assistant",
      "content": "Here is the breakdown.",
      "chartData": {
        "chartType": "pie",
        "config": { "title": "Expenses" },
        "data": [{ "segment": "Rent", "value": 1200 }],
        "chartConfig": {}
      }
    },
    { "id": "m3", "role": "user", "content": "And the budget?" },
    {
      "id": "m4",
      "role": "assistant",
      "content": "Budget table below.",
      "chartData": {
        "chartType": "tabular",
        "config": { "title": "Budget" },
        "data": [{ "item": "Rent", "amount": 1200 }],
        "chartConfig": {}
      }
    }
  ]
}"#;
