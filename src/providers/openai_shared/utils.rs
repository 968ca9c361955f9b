//! Conversion helpers and HTTP client for the Responses endpoint
//!
//! Contains request building (prompt/instructions/schema to wire form),
//! output extraction from a decoded body, and the HTTP client that maps
//! transport and status failures onto [`ResponsesError`].

use super::types::*;
use crate::core_types::request::{ResponseRequest, StructuredOutputSchema};
use crate::core_types::response::TokenUsage;
use crate::error::{ResponsesError, ResponsesResult};
use crate::logging::log_warn;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};

/// Build the `input` field.
///
/// A bare string when there are no instructions, otherwise exactly two
/// messages: system first, then user.
pub fn build_input(prompt: &str, instructions: Option<&str>) -> OpenAIInput {
    match instructions {
        Some(instructions) => OpenAIInput::Messages(vec![
            OpenAIInputMessage::system(instructions),
            OpenAIInputMessage::user(prompt),
        ]),
        None => OpenAIInput::Text(prompt.to_string()),
    }
}

/// Build the `text.format` block for a structured-output contract.
pub fn build_text_config(schema: &StructuredOutputSchema) -> OpenAITextConfig {
    OpenAITextConfig {
        format: OpenAITextFormat {
            format_type: "json_schema".to_string(),
            name: schema.name.clone(),
            schema: schema.schema.clone(),
            strict: schema.strict,
        },
    }
}

/// Convert a request to its wire form, filling in `default_model` when the
/// request does not name one.
pub fn build_wire_request(request: &ResponseRequest, default_model: &str) -> OpenAIResponsesRequest {
    OpenAIResponsesRequest {
        model: request.model().unwrap_or(default_model).to_string(),
        input: build_input(request.prompt(), request.instructions()),
        text: request.schema().map(build_text_config),
    }
}

/// Text and refusal pulled out of a decoded body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedOutput {
    pub text: String,
    pub refusal: Option<String>,
}

/// Collect the output text of a response.
///
/// A top-level `output_text` wins; otherwise every `output_text` content
/// part of every output item is concatenated in order. The first refusal, if
/// any, is reported separately.
pub fn extract_output(response: &OpenAIResponsesResponse) -> ExtractedOutput {
    let parts = response
        .output
        .iter()
        .flatten()
        .flat_map(|item| item.content.iter().flatten());

    let mut text = String::new();
    let mut refusal = None;
    for part in parts {
        match part.content_type.as_str() {
            "output_text" => text.push_str(part.text.as_deref().unwrap_or_default()),
            "refusal" if refusal.is_none() => {
                refusal = Some(part.refusal.clone().or_else(|| part.text.clone()).unwrap_or_default());
            }
            _ => {}
        }
    }

    if let Some(aggregate) = &response.output_text {
        text = aggregate.clone();
    }

    ExtractedOutput { text, refusal }
}

/// Normalize reported usage; the total is always recomputed.
pub fn normalize_usage(usage: Option<&OpenAIUsage>) -> TokenUsage {
    let Some(usage) = usage else {
        return TokenUsage::default();
    };

    let normalized = TokenUsage::new(usage.input_tokens, usage.output_tokens);
    if let Some(reported) = usage.total_tokens {
        if reported != normalized.total_tokens {
            log_warn!(
                reported_total = reported,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Reported total_tokens disagrees with input + output; using the sum"
            );
        }
    }
    normalized
}

/// Instructions echo as text, if the endpoint returned a non-empty string.
pub fn instructions_echo(response: &OpenAIResponsesResponse) -> Option<String> {
    match &response.instructions {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Numeric `retry-after` header value, in seconds.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// The `error.message` of a JSON error body, falling back to the raw text.
pub fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<OpenAIErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => "No error details".to_string(),
        _ => body.trim().to_string(),
    }
}

/// HTTP client functionality for the Responses endpoint
pub mod http {
    use super::*;
    use crate::logging::{log_debug, log_error};
    use std::time::Duration;

    /// Thin wrapper over a shared `reqwest::Client`
    #[derive(Debug, Clone)]
    pub struct ResponsesHttpClient {
        client: reqwest::Client,
        timeout: Duration,
    }

    impl ResponsesHttpClient {
        /// Create a client whose requests time out after `timeout`.
        pub fn new(timeout: Duration) -> ResponsesResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| {
                    ResponsesError::transport_failure(
                        format!("Failed to initialize HTTP client: {e}"),
                        Some(Box::new(e)),
                    )
                })?;
            Ok(Self { client, timeout })
        }

        /// Headers for a bearer-authenticated JSON request
        pub fn build_auth_headers(api_key: &str) -> ResponsesResult<HeaderMap> {
            let mut headers = HeaderMap::new();

            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                ResponsesError::invalid_request(format!("Invalid API key format: {e}"))
            })?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);

            Ok(headers)
        }

        /// POST one request. No retries.
        pub async fn execute_responses_request(
            &self,
            url: &str,
            headers: &HeaderMap,
            request: &OpenAIResponsesRequest,
        ) -> ResponsesResult<OpenAIResponsesResponse> {
            let response = self
                .client
                .post(url)
                .headers(headers.clone())
                .json(request)
                .send()
                .await
                .map_err(|e| self.transport_error(url, e))?;

            if !response.status().is_success() {
                return Err(handle_error_response(response).await);
            }

            parse_success_response(response).await
        }

        fn transport_error(&self, url: &str, e: reqwest::Error) -> ResponsesError {
            log_error!(
                url = %url,
                error = %e,
                "HTTP request failed"
            );
            let message = if e.is_timeout() {
                format!("Request timed out after {}s", self.timeout.as_secs())
            } else if e.is_connect() {
                format!("Connection failed: {e}")
            } else {
                format!("Request failed: {e}")
            };
            ResponsesError::transport_failure(message, Some(Box::new(e)))
        }
    }

    /// Map a non-success status onto an error kind.
    pub fn classify_status(status: u16, retry_after: Option<u64>, message: String) -> ResponsesError {
        match status {
            401 | 403 => ResponsesError::auth_failure(status, message),
            429 => ResponsesError::rate_limited(retry_after, message),
            400..=499 => ResponsesError::invalid_request(format!("{status}: {message}")),
            _ => ResponsesError::server_error(status, message, None),
        }
    }

    /// Handle non-success HTTP responses
    async fn handle_error_response(response: reqwest::Response) -> ResponsesError {
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        log_debug!(
            status = %status,
            error_text = %error_text,
            "API error response"
        );

        classify_status(status.as_u16(), retry_after, error_message_from_body(&error_text))
    }

    /// Parse a successful HTTP response body
    async fn parse_success_response(
        response: reqwest::Response,
    ) -> ResponsesResult<OpenAIResponsesResponse> {
        let status = response.status().as_u16();
        let raw_body = response.text().await.map_err(|e| {
            ResponsesError::transport_failure(
                format!("Failed to read response: {e}"),
                Some(Box::new(e)),
            )
        })?;

        serde_json::from_str(&raw_body).map_err(|e| {
            log_debug!(
                error = %e,
                raw_body = %raw_body,
                "Failed to decode response body"
            );
            ResponsesError::server_error(
                status,
                format!("Invalid response body: {e}"),
                Some(Box::new(e)),
            )
        })
    }
}
