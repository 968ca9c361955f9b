//! Request types for the Responses endpoint.

use crate::error::{ResponsesError, ResponsesResult};
use crate::response_parser::compile_validator;
use serde::{Deserialize, Serialize};

/// Longest schema name the endpoint accepts.
pub const MAX_SCHEMA_NAME_LEN: usize = 64;

/// JSON Schema contract the endpoint is asked to satisfy.
///
/// # Example
///
/// ```rust
/// use responses_adapter::StructuredOutputSchema;
/// use serde_json::json;
///
/// let schema = StructuredOutputSchema::new(
///     "calendar_event",
///     json!({
///         "type": "object",
///         "properties": { "name": { "type": "string" } },
///         "required": ["name"],
///         "additionalProperties": false
///     }),
/// );
/// assert!(schema.strict);
/// assert!(schema.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredOutputSchema {
    /// Identifier-like name: ASCII letters, digits, `_` and `-`.
    pub name: String,
    /// JSON Schema object.
    pub schema: serde_json::Value,
    /// When true, output that does not match is a [`ResponsesError::SchemaViolation`].
    pub strict: bool,
}

impl StructuredOutputSchema {
    /// Create a strict schema contract.
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
            strict: true,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check the name and that the schema compiles.
    ///
    /// # Errors
    ///
    /// Returns [`ResponsesError::InvalidRequest`] for a bad name, a
    /// non-object schema, or a schema that is not valid JSON Schema.
    pub fn validate(&self) -> ResponsesResult<()> {
        if !is_valid_schema_name(&self.name) {
            return Err(ResponsesError::invalid_request(format!(
                "Schema name '{}' must be 1-{MAX_SCHEMA_NAME_LEN} characters of [A-Za-z0-9_-]",
                self.name
            )));
        }
        if !self.schema.is_object() {
            return Err(ResponsesError::invalid_request(format!(
                "Schema '{}' must be a JSON object",
                self.name
            )));
        }
        compile_validator(&self.schema)?;
        Ok(())
    }
}

fn is_valid_schema_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_SCHEMA_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A single request to the Responses endpoint.
///
/// Built once with the `with_*` methods and not modified afterwards.
///
/// ```rust
/// use responses_adapter::ResponseRequest;
///
/// let request = ResponseRequest::new("AIの未来について教えてください。")
///     .with_instructions("あなたは楽観的な未来学者です。")
///     .with_model("gpt-4o");
/// assert_eq!(request.model(), Some("gpt-4o"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRequest {
    prompt: String,
    instructions: Option<String>,
    schema: Option<StructuredOutputSchema>,
    model: Option<String>,
}

impl ResponseRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            instructions: None,
            schema: None,
            model: None,
        }
    }

    /// System-style directive sent ahead of the prompt. Blank text is ignored.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        self.instructions = if instructions.trim().is_empty() {
            None
        } else {
            Some(instructions)
        };
        self
    }

    pub fn with_schema(mut self, schema: StructuredOutputSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Model identifier; the client's default model is used when unset.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn schema(&self) -> Option<&StructuredOutputSchema> {
        self.schema.as_ref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Whether output must be validated against the schema.
    pub fn is_strict(&self) -> bool {
        self.schema.as_ref().is_some_and(|s| s.strict)
    }

    /// Reject requests the endpoint would refuse anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ResponsesError::InvalidRequest`] for a blank prompt, a blank
    /// model name, or an invalid schema.
    pub fn validate(&self) -> ResponsesResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ResponsesError::invalid_request("Prompt must not be empty"));
        }
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(ResponsesError::invalid_request(
                    "Model identifier must not be empty",
                ));
            }
        }
        if let Some(schema) = &self.schema {
            schema.validate()?;
        }
        Ok(())
    }
}
