//! Shared fixtures for unit tests.

use crate::core_types::{NormalizedResponse, StructuredOutputSchema, TokenUsage};
use serde_json::json;

/// The response returned by the mocked endpoint in the "Hello" scenario.
pub fn hello_response() -> NormalizedResponse {
    NormalizedResponse {
        id: "r1".to_string(),
        model: "gpt-4o".to_string(),
        created_at: 1_700_000_000,
        output_text: "Hi".to_string(),
        usage: TokenUsage::new(2, 1),
        instructions: None,
    }
}

/// Strict calendar-event schema used by structured output tests.
pub fn calendar_schema() -> StructuredOutputSchema {
    StructuredOutputSchema::new(
        "calendar_event",
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "date": { "type": "string" },
                "participants": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["name", "date", "participants"],
            "additionalProperties": false
        }),
    )
}

/// A response whose output text is `output_text`.
pub fn response_with_output(output_text: &str) -> NormalizedResponse {
    NormalizedResponse {
        output_text: output_text.to_string(),
        ..hello_response()
    }
}
