// Unit Tests for Request Construction and Validation
//
// UNIT UNDER TEST: ResponseRequest, StructuredOutputSchema
//
// BUSINESS RESPONSIBILITY:
//   - Captures prompt, optional instructions, schema and model once
//   - Rejects requests the endpoint would refuse before any network call
//   - Enforces identifier-like schema names and compilable schemas
//
// TEST COVERAGE:
//   - Builder methods and accessors
//   - Blank prompt, blank instructions, blank model
//   - Schema name rules, non-object schemas, uncompilable schemas

use crate::core_types::{ResponseRequest, StructuredOutputSchema};
use crate::error::ErrorKind;
use crate::tests::helpers::calendar_schema;
use serde_json::json;

#[cfg(test)]
mod request_builder_tests {
    use super::*;

    #[test]
    fn test_new_request_has_only_prompt() {
        let request = ResponseRequest::new("Hello");

        assert_eq!(request.prompt(), "Hello");
        assert_eq!(request.instructions(), None);
        assert!(request.schema().is_none());
        assert_eq!(request.model(), None);
        assert!(!request.is_strict());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        // Arrange & Act
        let request = ResponseRequest::new("AIの未来について教えてください。")
            .with_instructions("あなたは楽観的な未来学者です。")
            .with_schema(calendar_schema())
            .with_model("gpt-4o-mini");

        // Assert
        assert_eq!(request.instructions(), Some("あなたは楽観的な未来学者です。"));
        assert_eq!(request.schema().map(|s| s.name.as_str()), Some("calendar_event"));
        assert_eq!(request.model(), Some("gpt-4o-mini"));
        assert!(request.is_strict());
    }

    #[test]
    fn test_blank_instructions_are_dropped() {
        let request = ResponseRequest::new("Hello").with_instructions("   ");

        assert_eq!(request.instructions(), None);
    }

    #[test]
    fn test_non_strict_schema() {
        let request =
            ResponseRequest::new("Hello").with_schema(calendar_schema().with_strict(false));

        assert!(!request.is_strict());
    }
}

#[cfg(test)]
mod request_validation_tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = ResponseRequest::new("Hello").with_schema(calendar_schema());

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_prompt_is_invalid() {
        for prompt in ["", "   ", "\n\t"] {
            let err = ResponseRequest::new(prompt).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "prompt {:?}", prompt);
        }
    }

    #[test]
    fn test_blank_model_is_invalid() {
        let err = ResponseRequest::new("Hello")
            .with_model(" ")
            .validate()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_schema_name_must_be_identifier_like() {
        let too_long = "x".repeat(65);
        for name in ["", "calendar event", "événement", too_long.as_str()] {
            let schema = StructuredOutputSchema::new(name, json!({"type": "object"}));
            let err = schema.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "name {:?}", name);
        }
    }

    #[test]
    fn test_schema_name_accepts_dashes_and_underscores() {
        let schema = StructuredOutputSchema::new("calendar-event_v2", json!({"type": "object"}));

        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_schema_must_be_object() {
        let schema = StructuredOutputSchema::new("listing", json!(["not", "a", "schema"]));

        assert_eq!(schema.validate().unwrap_err().kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_uncompilable_schema_is_invalid() {
        // "type" must be a string or array of strings
        let schema = StructuredOutputSchema::new("broken", json!({"type": 42}));

        let err = ResponseRequest::new("Hello")
            .with_schema(schema)
            .validate()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }
}
