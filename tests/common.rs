//! Test helper utilities for responses-adapter integration tests
//!
//! Shared wiremock fixtures and client construction.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use responses_adapter::{Credential, OpenAIResponsesClient, ResponsesConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::ResponseTemplate;

pub const TEST_API_KEY: &str = "sk-test-key";

/// Configuration pointing at a mock server
pub fn create_test_config(base_url: &str) -> ResponsesConfig {
    ResponsesConfig::new(Credential::new(TEST_API_KEY))
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(5))
}

/// Client pointing at a mock server
///
/// # Panics
///
/// Panics if the client cannot be built (test failure is appropriate).
pub fn create_test_client(base_url: &str) -> OpenAIResponsesClient {
    OpenAIResponsesClient::new(create_test_config(base_url)).expect("client should build")
}

/// Body returned in the "Hello" scenario
pub fn hello_body() -> serde_json::Value {
    json!({
        "id": "r1",
        "object": "response",
        "created_at": 1_700_000_000,
        "status": "completed",
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "output_text", "text": "Hi", "annotations": [] }]
        }],
        "usage": { "input_tokens": 2, "output_tokens": 1, "total_tokens": 3 }
    })
}

/// Successful body with `text` as the single output part
pub fn body_with_output(text: &str) -> serde_json::Value {
    let mut body = hello_body();
    body["output"][0]["content"][0]["text"] = json!(text);
    body
}

/// Endpoint error body in the documented envelope
pub fn error_body(message: &str, error_type: &str) -> serde_json::Value {
    json!({
        "error": { "message": message, "type": error_type, "param": null, "code": null }
    })
}

pub fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Calendar-event schema used for structured output scenarios
pub fn calendar_schema_json() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "date": { "type": "string" },
            "participants": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["name", "date", "participants"],
        "additionalProperties": false
    })
}
