use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::infer::InferredSchema;
use super::value::CellValue;

/// One data row: field name to value, in source order.
pub type Row = IndexMap<String, CellValue>;

/// Which rendering rule set a chart uses.
///
/// Unrecognized names are kept verbatim so they can be reported; they
/// render nothing. A `chartType` that is not a string is unknown too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum ChartKind {
    Bar,
    MultiBar,
    Line,
    Pie,
    Area,
    StackedArea,
    Tabular,
    Unknown(String),
}

impl ChartKind {
    /// All recognized kinds, in wire-name order.
    pub const KNOWN: [Self; 7] = [
        Self::Bar,
        Self::MultiBar,
        Self::Line,
        Self::Pie,
        Self::Area,
        Self::StackedArea,
        Self::Tabular,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bar" => Self::Bar,
            "multiBar" => Self::MultiBar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            "area" => Self::Area,
            "stackedArea" => Self::StackedArea,
            "tabular" => Self::Tabular,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bar => "bar",
            Self::MultiBar => "multiBar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Area => "area",
            Self::StackedArea => "stackedArea",
            Self::Tabular => "tabular",
            Self::Unknown(name) => name.as_str(),
        }
    }

    /// Kinds drawn against a category axis.
    #[must_use]
    pub const fn is_series(&self) -> bool {
        matches!(
            self,
            Self::Bar | Self::MultiBar | Self::Line | Self::Area | Self::StackedArea
        )
    }
}

impl From<String> for ChartKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Value> for ChartKind {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::from_name(&name),
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub percentage: f64,
    pub direction: TrendDirection,
}

/// Per-column value format for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Text,
    Number,
    Percentage,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Explicit table column (tabular charts only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
}

/// Descriptive metadata (`config` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDefinition>>,
}

/// Per-series or per-column descriptor (`chartConfig` entries).
///
/// Series charts read `stacked`/`color`; tables read `format`, `align`,
/// `width` and `color`. Both read `label`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<ColumnAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl ChartConfigEntry {
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartDataWire {
    chart_type: ChartKind,
    #[serde(default)]
    config: ChartMeta,
    #[serde(default)]
    data: Vec<Row>,
    #[serde(default)]
    chart_config: IndexMap<String, ChartConfigEntry>,
}

/// One renderable chart or table, as produced by the agent backend.
///
/// Immutable once built; the inferred schema is computed at construction
/// and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChartDataWire", into = "ChartDataWire")]
pub struct ChartData {
    kind: ChartKind,
    config: ChartMeta,
    data: Vec<Row>,
    chart_config: IndexMap<String, ChartConfigEntry>,
    schema: InferredSchema,
}

impl ChartData {
    #[must_use]
    pub fn new(
        kind: ChartKind,
        config: ChartMeta,
        data: Vec<Row>,
        chart_config: IndexMap<String, ChartConfigEntry>,
    ) -> Self {
        let schema = InferredSchema::from_rows(&data);
        Self {
            kind,
            config,
            data,
            chart_config,
            schema,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &ChartKind {
        &self.kind
    }

    #[must_use]
    pub const fn config(&self) -> &ChartMeta {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    #[must_use]
    pub const fn chart_config(&self) -> &IndexMap<String, ChartConfigEntry> {
        &self.chart_config
    }

    #[must_use]
    pub const fn schema(&self) -> &InferredSchema {
        &self.schema
    }

    /// Format inferred from the first non-null sample of `key`.
    #[must_use]
    pub fn inferred_format(&self, key: &str) -> Option<DataFormat> {
        self.schema.format_of(key)
    }

    /// Series keys: every `chartConfig` key except the category axis key.
    #[must_use]
    pub fn series_keys(&self) -> Vec<&str> {
        let axis = self.config.x_axis_key.as_deref();
        self.chart_config
            .keys()
            .map(String::as_str)
            .filter(|key| Some(*key) != axis)
            .collect()
    }

    /// Display label for a field: explicit `chartConfig` label, else humanized key.
    #[must_use]
    pub fn label_for(&self, key: &str) -> String {
        self.chart_config
            .get(key)
            .and_then(|entry| entry.label.as_deref())
            .filter(|label| !label.is_empty())
            .map_or_else(|| humanize_label(key), str::to_string)
    }
}

impl From<ChartDataWire> for ChartData {
    fn from(wire: ChartDataWire) -> Self {
        Self::new(wire.chart_type, wire.config, wire.data, wire.chart_config)
    }
}

impl From<ChartData> for ChartDataWire {
    fn from(chart: ChartData) -> Self {
        Self {
            chart_type: chart.kind,
            config: chart.config,
            data: chart.data,
            chart_config: chart.chart_config,
        }
    }
}

/// Default display label: underscores become spaces, first letter upper-cased.
#[must_use]
pub fn humanize_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
