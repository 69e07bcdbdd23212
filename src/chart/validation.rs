//! Contract invariant checks.
//!
//! Rendering never depends on these checks; they exist so producers can be
//! told what they got wrong.

use std::fmt;

use super::model::{ChartData, ChartKind, Row};
use super::value::CellValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractIssue {
    UnknownChartType(String),
    MissingTitle,
    MissingAxisKey,
    NoSeries,
    MissingAxisField { row: usize, key: String },
    NonNumericSeriesValue { row: usize, key: String },
    PieRowMissingValue { row: usize },
    PieRowMissingSegment { row: usize },
    UnknownColumn { key: String },
}

impl fmt::Display for ContractIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChartType(name) => {
                write!(f, "unknown chartType '{name}' (renders nothing)")
            }
            Self::MissingTitle => write!(f, "config.title is empty"),
            Self::MissingAxisKey => write!(f, "config.xAxisKey is required for this chart type"),
            Self::NoSeries => write!(f, "chartConfig defines no series besides the axis key"),
            Self::MissingAxisField { row, key } => {
                write!(f, "row {row}: axis field '{key}' is missing")
            }
            Self::NonNumericSeriesValue { row, key } => {
                write!(f, "row {row}: series '{key}' is missing or not a number")
            }
            Self::PieRowMissingValue { row } => {
                write!(f, "row {row}: pie slice has no numeric 'value'")
            }
            Self::PieRowMissingSegment { row } => {
                write!(f, "row {row}: pie slice has no 'segment' name")
            }
            Self::UnknownColumn { key } => {
                write!(f, "column '{key}' does not appear in any row")
            }
        }
    }
}

impl ChartData {
    /// Check the contract invariants for this chart's type.
    ///
    /// Row numbers in the returned issues are 1-based.
    #[must_use]
    pub fn validate(&self) -> Vec<ContractIssue> {
        let mut issues = Vec::new();

        if self.config().title.trim().is_empty() {
            issues.push(ContractIssue::MissingTitle);
        }

        match self.kind() {
            ChartKind::Unknown(name) => issues.push(ContractIssue::UnknownChartType(name.clone())),
            ChartKind::Pie => check_pie(self.rows(), &mut issues),
            ChartKind::Tabular => check_columns(self, &mut issues),
            _ => check_series(self, &mut issues),
        }

        issues
    }
}

fn check_series(chart: &ChartData, issues: &mut Vec<ContractIssue>) {
    let axis_key = chart.config().x_axis_key.as_deref();
    if axis_key.is_none() {
        issues.push(ContractIssue::MissingAxisKey);
    }

    let series = chart.series_keys();
    if series.is_empty() {
        issues.push(ContractIssue::NoSeries);
    }

    for (index, row) in chart.rows().iter().enumerate() {
        let row_number = index + 1;

        if let Some(axis) = axis_key
            && field(row, axis).is_none()
        {
            issues.push(ContractIssue::MissingAxisField {
                row: row_number,
                key: axis.to_string(),
            });
        }

        for key in &series {
            if field(row, key).and_then(CellValue::as_number).is_none() {
                issues.push(ContractIssue::NonNumericSeriesValue {
                    row: row_number,
                    key: (*key).to_string(),
                });
            }
        }
    }
}

fn check_pie(rows: &[Row], issues: &mut Vec<ContractIssue>) {
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        if field(row, "value").and_then(CellValue::as_number).is_none() {
            issues.push(ContractIssue::PieRowMissingValue { row: row_number });
        }
        if field(row, "segment").is_none() {
            issues.push(ContractIssue::PieRowMissingSegment { row: row_number });
        }
    }
}

fn check_columns(chart: &ChartData, issues: &mut Vec<ContractIssue>) {
    let Some(columns) = chart.config().columns.as_ref() else {
        return;
    };
    if chart.rows().is_empty() {
        return;
    }

    for column in columns {
        let present = chart
            .rows()
            .iter()
            .any(|row| row.contains_key(&column.key));
        if !present {
            issues.push(ContractIssue::UnknownColumn {
                key: column.key.clone(),
            });
        }
    }
}

/// A present, non-null field.
fn field<'a>(row: &'a Row, key: &str) -> Option<&'a CellValue> {
    row.get(key).filter(|value| !value.is_null())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
