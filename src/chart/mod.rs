//! The chart-data exchange contract.
//!
//! `ChartData` is what the agent backend produces and the renderers consume.
//! It is deserialized (or synthesized from raw rows) once and never mutated.

mod infer;
mod message;
mod model;
mod validation;
mod value;

pub use infer::{ID_LIKE_KEYS, InferredSchema, infer_format, is_id_like, synthesize_table};
pub use message::{
    AgentResponse, AttachedChart, ChartDocument, ChatMessage, MessageContent, Role, ToolUse,
    Transcript,
};
pub use model::{
    ChartConfigEntry, ChartData, ChartKind, ChartMeta, ColumnAlign, ColumnDefinition, DataFormat,
    Row, Trend, TrendDirection, humanize_label,
};
pub use validation::ContractIssue;
pub use value::{CellValue, parse_numeric};
