//! Envelopes that carry charts: agent responses, chat messages and transcripts.
//!
//! Chart payloads stay raw JSON here. They are only turned into `ChartData`
//! at the render boundary, so one malformed chart cannot sink a whole
//! conversation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FinchartError, Result};

/// Tool invocation echoed back by the agent backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUse {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub input: Value,
}

/// One backend answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub has_tool_use: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use: Option<ToolUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Value>,
}

impl AgentResponse {
    /// The chart to display: `chartData` first, else the tool input.
    #[must_use]
    pub fn chart_payload(&self) -> Option<&Value> {
        self.chart_data
            .as_ref()
            .or_else(|| self.tool_use.as_ref().map(|tool| &tool.input))
            .filter(|payload| !payload.is_null())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

/// Message body: a plain string or a list of content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<Value>),
}

impl Default for MessageContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl MessageContent {
    /// Readable text. Only `{"type": "text"}` blocks contribute; other
    /// blocks (images, documents) are skipped.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Blocks(blocks) => blocks
                .iter()
                .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|block| block.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Value>,
}

/// A chart attached to a transcript message.
#[derive(Debug, Clone, Copy)]
pub struct AttachedChart<'a> {
    pub message_id: &'a str,
    pub payload: &'a Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptWire {
    List(Vec<ChatMessage>),
    Wrapped { messages: Vec<ChatMessage> },
}

/// Ordered conversation, oldest message first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TranscriptWire")]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl From<TranscriptWire> for Transcript {
    fn from(wire: TranscriptWire) -> Self {
        match wire {
            TranscriptWire::List(messages) | TranscriptWire::Wrapped { messages } => {
                Self { messages }
            }
        }
    }
}

impl Transcript {
    /// Every attached chart, most recent message first.
    #[must_use]
    pub fn charts_newest_first(&self) -> Vec<AttachedChart<'_>> {
        self.messages
            .iter()
            .rev()
            .filter_map(|message| {
                message
                    .chart_data
                    .as_ref()
                    .filter(|payload| !payload.is_null())
                    .map(|payload| AttachedChart {
                        message_id: &message.id,
                        payload,
                    })
            })
            .collect()
    }
}

/// Any input document the CLI accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDocument {
    Chart(Value),
    Response(AgentResponse),
    Transcript(Transcript),
}

impl ChartDocument {
    /// Classify a parsed JSON document by shape.
    ///
    /// # Errors
    /// Returns an error when the document matches none of the known shapes,
    /// or when an envelope's fields have the wrong types.
    pub fn from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Array(_) => Ok(Self::Transcript(serde_json::from_value(value)?)),
            Value::Object(map) if map.contains_key("chartType") => Ok(Self::Chart(value)),
            Value::Object(map) if map.contains_key("messages") => {
                Ok(Self::Transcript(serde_json::from_value(value)?))
            }
            Value::Object(map)
                if ["chartData", "toolUse", "hasToolUse"]
                    .iter()
                    .any(|key| map.contains_key(*key)) =>
            {
                Ok(Self::Response(serde_json::from_value(value)?))
            }
            _ => Err(FinchartError::InvalidInput(
                "expected a chart, an agent response or a transcript".to_string(),
            )),
        }
    }

    /// Chart payloads in display order.
    #[must_use]
    pub fn chart_payloads(&self) -> Vec<&Value> {
        match self {
            Self::Chart(payload) => vec![payload],
            Self::Response(response) => response.chart_payload().into_iter().collect(),
            Self::Transcript(transcript) => transcript
                .charts_newest_first()
                .into_iter()
                .map(|chart| chart.payload)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
