//! Unit Tests for Responses Request Building
//!
//! UNIT UNDER TEST: Conversion functions in openai_shared/utils.rs
//!
//! BUSINESS RESPONSIBILITY:
//!   - Send the prompt as a bare string when no instructions are given
//!   - Send exactly two messages, system then user, when instructions are given
//!   - Attach a `text.format` json_schema block for structured output
//!   - Fill in the configured model when the request does not name one
//!   - Build bearer headers without exposing the key in debug output
//!
//! TEST COVERAGE:
//!   - Input shape with and without instructions (including non-ASCII text)
//!   - Serialized JSON of complete wire requests
//!   - Model fallback
//!   - Status classification and retry-after parsing
//!   - Error body message extraction

use super::super::types::*;
use super::super::utils::http::{classify_status, ResponsesHttpClient};
use super::super::utils::*;
use crate::core_types::{ResponseRequest, StructuredOutputSchema};
use crate::error::{ErrorKind, ResponsesError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, RETRY_AFTER};
use serde_json::json;

// ============================================================================
// Test Helper Functions
// ============================================================================

fn calendar_schema() -> StructuredOutputSchema {
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

// ============================================================================
// Input Building
// ============================================================================

#[test]
fn test_build_input_without_instructions_is_bare_string() {
    let input = build_input("Hello", None);

    assert_eq!(input, OpenAIInput::Text("Hello".to_string()));
    assert_eq!(serde_json::to_value(&input).unwrap(), json!("Hello"));
}

#[test]
fn test_build_input_with_instructions_is_system_then_user() {
    // Arrange
    let prompt = "AIの未来について教えてください。";
    let instructions = "あなたは楽観的な未来学者です。";

    // Act
    let input = build_input(prompt, Some(instructions));

    // Assert
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!([
            { "role": "system", "content": "あなたは楽観的な未来学者です。" },
            { "role": "user", "content": "AIの未来について教えてください。" }
        ])
    );
}

#[test]
fn test_input_round_trips_through_untagged_enum() {
    let input: OpenAIInput =
        serde_json::from_value(json!([{ "role": "user", "content": "Hi" }])).unwrap();

    assert_eq!(input, OpenAIInput::Messages(vec![OpenAIInputMessage::user("Hi")]));
}

// ============================================================================
// Wire Request Building
// ============================================================================

#[test]
fn test_plain_request_serializes_without_text_block() {
    let request = ResponseRequest::new("Hello");

    let wire = build_wire_request(&request, "gpt-4o");

    assert_eq!(
        serde_json::to_value(&wire).unwrap(),
        json!({ "model": "gpt-4o", "input": "Hello" })
    );
}

#[test]
fn test_request_model_overrides_default() {
    let request = ResponseRequest::new("Hello").with_model("gpt-4o-mini");

    let wire = build_wire_request(&request, "gpt-4o");

    assert_eq!(wire.model, "gpt-4o-mini");
}

#[test]
fn test_schema_request_carries_json_schema_format() {
    // Arrange
    let request = ResponseRequest::new("Alice and Bob are going to a science fair on Friday.")
        .with_instructions("Extract the event information.")
        .with_schema(calendar_schema());

    // Act
    let body = serde_json::to_value(build_wire_request(&request, "gpt-4o")).unwrap();

    // Assert
    assert_eq!(body["text"]["format"]["type"], "json_schema");
    assert_eq!(body["text"]["format"]["name"], "calendar_event");
    assert_eq!(body["text"]["format"]["strict"], true);
    assert_eq!(
        body["text"]["format"]["schema"]["required"],
        json!(["name", "date", "participants"])
    );
    assert_eq!(body["input"][0]["role"], "system");
    assert_eq!(body["input"][1]["role"], "user");
}

#[test]
fn test_non_strict_schema_is_sent_as_non_strict() {
    let config = build_text_config(&calendar_schema().with_strict(false));

    assert!(!config.format.strict);
}

// ============================================================================
// Headers
// ============================================================================

#[test]
fn test_auth_headers_use_bearer_scheme() {
    let headers = ResponsesHttpClient::build_auth_headers("sk-test").unwrap();

    let auth = headers.get(AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer sk-test");
    assert!(auth.is_sensitive());
    assert!(!format!("{:?}", headers).contains("sk-test"));
}

#[test]
fn test_auth_headers_reject_control_characters() {
    let err = ResponsesHttpClient::build_auth_headers("sk-\ntest").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

// ============================================================================
// Status Classification
// ============================================================================

#[test]
fn test_classify_status_auth() {
    for status in [401, 403] {
        let err = classify_status(status, None, "Unauthorized".to_string());
        assert_eq!(err.kind(), ErrorKind::AuthFailure, "status {}", status);
    }
}

#[test]
fn test_classify_status_rate_limited_keeps_retry_after() {
    let err = classify_status(429, Some(3), "Rate limit reached".to_string());

    match err {
        ResponsesError::RateLimited {
            retry_after_seconds,
            message,
        } => {
            assert_eq!(retry_after_seconds, Some(3));
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("Expected RateLimited, got: {:?}", other),
    }
}

#[test]
fn test_classify_status_other_client_errors() {
    for status in [400, 404, 422] {
        let err = classify_status(status, None, "Bad request".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidRequest, "status {}", status);
    }
}

#[test]
fn test_classify_status_server_errors() {
    for status in [500, 502, 503, 302] {
        let err = classify_status(status, None, "Upstream failure".to_string());
        assert_eq!(err.kind(), ErrorKind::ServerError, "status {}", status);
    }
}

#[test]
fn test_parse_retry_after_seconds() {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_static("3"));

    assert_eq!(parse_retry_after(&headers), Some(3));
}

#[test]
fn test_parse_retry_after_ignores_http_dates_and_absence() {
    let mut headers = HeaderMap::new();
    assert_eq!(parse_retry_after(&headers), None);

    headers.insert(
        RETRY_AFTER,
        HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
    );
    assert_eq!(parse_retry_after(&headers), None);
}

// ============================================================================
// Error Bodies
// ============================================================================

#[test]
fn test_error_message_from_json_envelope() {
    let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;

    assert_eq!(error_message_from_body(body), "Incorrect API key provided");
}

#[test]
fn test_error_message_falls_back_to_raw_text() {
    assert_eq!(error_message_from_body("  upstream timeout \n"), "upstream timeout");
    assert_eq!(error_message_from_body(""), "No error details");
}
