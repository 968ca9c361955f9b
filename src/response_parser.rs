//! Structured output parsing and JSON Schema validation.
//!
//! Output is interpreted in two steps:
//!
//! 1. Parse the text as JSON.
//! 2. Validate the value against the requested schema.
//!
//! [`validate_strict_output`] is what the client runs for strict schemas: the
//! text must be JSON exactly as returned. [`parse_structured`] is the lenient
//! caller-side variant that also accepts the body of a single Markdown code
//! fence (```` ```json ... ``` ````).
//!
//! Either step failing yields [`ResponsesError::SchemaViolation`] carrying
//! the original output text.

use crate::core_types::request::StructuredOutputSchema;
use crate::core_types::response::NormalizedResponse;
use crate::error::{ResponsesError, ResponsesResult};
use crate::logging::log_debug;
use serde_json::Value;

/// Maximum number of validation errors quoted in a violation message.
const MAX_REPORTED_ERRORS: usize = 3;

/// Compile a JSON Schema.
///
/// # Errors
///
/// Returns [`ResponsesError::InvalidRequest`] if the schema is not valid
/// JSON Schema.
pub fn compile_validator(schema: &Value) -> ResponsesResult<jsonschema::Validator> {
    jsonschema::validator_for(schema)
        .map_err(|e| ResponsesError::invalid_request(format!("Invalid JSON Schema: {e}")))
}

/// Parse `response.output_text` as JSON and validate it against `schema`.
///
/// Output wrapped in a single Markdown code fence is unwrapped first.
///
/// # Errors
///
/// - [`ResponsesError::SchemaViolation`] if the text is not JSON or does not
///   match the schema.
/// - [`ResponsesError::InvalidRequest`] if the schema itself does not compile.
pub fn parse_structured(
    response: &NormalizedResponse,
    schema: &StructuredOutputSchema,
) -> ResponsesResult<Value> {
    let raw = response.output_text.as_str();
    let value = ResponseParser::parse_json_output(raw);
    validate_value(value, raw, schema)
}

/// Check that `output_text` is, as returned, JSON matching `schema`.
///
/// No code-fence fallback: fenced or otherwise decorated output is a
/// violation.
///
/// # Errors
///
/// Same as [`parse_structured`].
pub fn validate_strict_output(
    output_text: &str,
    schema: &StructuredOutputSchema,
) -> ResponsesResult<Value> {
    let value = serde_json::from_str::<Value>(output_text).ok();
    validate_value(value, output_text, schema)
}

fn validate_value(
    value: Option<Value>,
    raw: &str,
    schema: &StructuredOutputSchema,
) -> ResponsesResult<Value> {
    let validator = compile_validator(&schema.schema)?;

    let Some(value) = value else {
        return Err(ResponsesError::schema_violation(
            format!(
                "Output for '{}' is not valid JSON: {}",
                schema.name,
                ResponseParser::preview(raw)
            ),
            Some(raw.to_string()),
        ));
    };

    let messages: Vec<String> = validator
        .iter_errors(&value)
        .take(MAX_REPORTED_ERRORS)
        .map(|err| format!("{} at '{}'", err, err.instance_path))
        .collect();
    if !messages.is_empty() {
        return Err(ResponsesError::schema_violation(
            format!(
                "Output does not match schema '{}': {}",
                schema.name,
                messages.join("; ")
            ),
            Some(raw.to_string()),
        ));
    }

    log_debug!(
        schema_name = %schema.name,
        output_length = raw.len(),
        "Structured output validated"
    );
    Ok(value)
}

/// Lenient JSON extraction from model output.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse `raw` as JSON, retrying on the contents of a surrounding code
    /// fence. Returns `None` if neither parses.
    pub fn parse_json_output(raw: &str) -> Option<Value> {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return Some(value);
        }

        let unfenced = Self::strip_code_fence(raw)?;
        log_debug!(
            original_length = raw.len(),
            unfenced_length = unfenced.len(),
            "Retrying JSON parse inside code fence"
        );
        serde_json::from_str::<Value>(unfenced).ok()
    }

    /// Body of a single fenced block spanning the whole text, if present.
    pub fn strip_code_fence(raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        let rest = trimmed.strip_prefix("```")?;
        let rest = rest.strip_suffix("```")?;
        // Drop the info string (`json`, `JSON`, ...) on the opening line.
        let body = match rest.split_once('\n') {
            Some((info, body)) if info.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
            _ => rest,
        };
        Some(body.trim())
    }

    fn preview(raw: &str) -> String {
        let preview: String = raw.chars().take(200).collect();
        if raw.chars().count() > 200 {
            format!("{preview}...")
        } else {
            preview
        }
    }
}
