//! Wire structures for the OpenAI Responses endpoint
//!
//! Request side: `model`, `input` (bare string or role-tagged messages) and
//! the optional `text.format` structured-output block. Response side: only the
//! fields the adapter consumes; everything else is ignored on decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Role-tagged input message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIInputMessage {
    pub role: String,
    pub content: String,
}

impl OpenAIInputMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The `input` field: the prompt alone, or system + user messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenAIInput {
    Text(String),
    Messages(Vec<OpenAIInputMessage>),
}

/// `text.format` block requesting JSON-schema output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAITextFormat {
    #[serde(rename = "type")]
    pub format_type: String, // "json_schema"
    pub name: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAITextConfig {
    pub format: OpenAITextFormat,
}

/// Body POSTed to `/v1/responses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIResponsesRequest {
    pub model: String,
    pub input: OpenAIInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<OpenAITextConfig>,
}

/// Decoded Responses endpoint body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIResponsesResponse {
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub created_at: i64,
    #[serde(default)]
    pub status: Option<String>,
    /// Convenience aggregate some servers include; preferred when present.
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Option<Vec<OpenAIOutputItem>>,
    /// Echo of the request's instructions; a string or null in practice.
    #[serde(default)]
    pub instructions: Option<serde_json::Value>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
    #[serde(default)]
    pub error: Option<OpenAIErrorBody>,
}

/// One entry of the `output` array
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIOutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<OpenAIOutputContent>>,
}

/// Content part of a message output item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIOutputContent {
    #[serde(rename = "type")]
    pub content_type: String, // "output_text" | "refusal"
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Usage information in a Responses body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// `error` object, both inside failed responses and in non-2xx bodies
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

/// Envelope of a non-2xx body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIErrorEnvelope {
    pub error: OpenAIErrorBody,
}

/// Accept integer or fractional epoch seconds; fractions are truncated.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value
        .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
        .unwrap_or(0))
}
