//! Column format inference and tabular chart synthesis from raw query rows.

use indexmap::IndexMap;

use super::model::{ChartData, ChartKind, ChartMeta, ColumnDefinition, DataFormat, Row, humanize_label};
use super::value::{CellValue, parse_numeric};

/// Field names hidden from inferred table columns (compared case-insensitively).
pub const ID_LIKE_KEYS: [&str; 3] = ["id", "_id", "uuid"];

/// Whether `key` names an identifier column that tables hide by default.
#[must_use]
pub fn is_id_like(key: &str) -> bool {
    ID_LIKE_KEYS
        .iter()
        .any(|id| key.eq_ignore_ascii_case(id))
}

/// Infer the display format of a column from one sample value.
///
/// Numbers and numeric text are `number`; anything whose string form
/// contains `%` is `percentage`; everything else is `text`.
#[must_use]
pub fn infer_format(sample: &CellValue) -> DataFormat {
    match sample {
        CellValue::Number(_) => DataFormat::Number,
        CellValue::Text(text) if parse_numeric(text).is_some() => DataFormat::Number,
        other if other.to_string().contains('%') => DataFormat::Percentage,
        _ => DataFormat::Text,
    }
}

/// Formats inferred once per first-row field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferredSchema {
    formats: IndexMap<String, DataFormat>,
}

impl InferredSchema {
    /// Sample each first-row field. The sample is the first non-null value
    /// of that field scanning down the rows; an all-null column is `text`.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };

        let formats = first
            .keys()
            .map(|key| {
                let sample = rows
                    .iter()
                    .filter_map(|row| row.get(key))
                    .find(|value| !value.is_null());
                let format = sample.map_or(DataFormat::Text, infer_format);
                (key.clone(), format)
            })
            .collect();

        Self { formats }
    }

    #[must_use]
    pub fn format_of(&self, key: &str) -> Option<DataFormat> {
        self.formats.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DataFormat)> {
        self.formats.iter().map(|(key, format)| (key.as_str(), *format))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

/// Build a tabular chart from raw query rows.
///
/// Columns are every first-row field except identifier columns, each with an
/// explicit inferred format. Numeric text in `number` columns is stored as a
/// number so it formats with grouping.
#[must_use]
pub fn synthesize_table(title: impl Into<String>, rows: Vec<Row>) -> ChartData {
    let schema = InferredSchema::from_rows(&rows);

    let columns: Vec<ColumnDefinition> = schema
        .iter()
        .filter(|(key, _)| !is_id_like(key))
        .map(|(key, format)| ColumnDefinition {
            key: key.to_string(),
            label: humanize_label(key),
            format: Some(format),
        })
        .collect();

    let rows: Vec<Row> = rows
        .into_iter()
        .map(|row| coerce_numeric_columns(row, &schema))
        .collect();

    let description = match rows.len() {
        1 => "1 row".to_string(),
        n => format!("{n} rows"),
    };

    let config = ChartMeta {
        title: title.into(),
        description,
        columns: Some(columns),
        ..ChartMeta::default()
    };

    ChartData::new(ChartKind::Tabular, config, rows, IndexMap::new())
}

fn coerce_numeric_columns(row: Row, schema: &InferredSchema) -> Row {
    row.into_iter()
        .map(|(key, value)| {
            let numeric = match (&value, schema.format_of(&key)) {
                (CellValue::Text(text), Some(DataFormat::Number)) => parse_numeric(text),
                _ => None,
            };
            (key, numeric.map_or(value, CellValue::Number))
        })
        .collect()
}

#[cfg(test)]
#[path = "infer_tests.rs"]
mod tests;
