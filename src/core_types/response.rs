//! Normalized response record.

use crate::core_types::request::StructuredOutputSchema;
use crate::error::ResponsesResult;
use crate::response_parser::parse_structured;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token counts reported by the endpoint.
///
/// `total_tokens` is always `input_tokens + output_tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens.saturating_add(output_tokens),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.input_tokens.checked_add(self.output_tokens) == Some(self.total_tokens)
    }
}

/// Provider-independent view of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    pub id: String,
    pub model: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub output_text: String,
    pub usage: TokenUsage,
    /// Instructions echoed back by the endpoint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl NormalizedResponse {
    /// Creation time as a UTC timestamp, when representable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.created_at, 0)
    }

    /// Parse `output_text` as JSON matching `schema`.
    ///
    /// See [`parse_structured`].
    pub fn structured(&self, schema: &StructuredOutputSchema) -> ResponsesResult<serde_json::Value> {
        parse_structured(self, schema)
    }
}
