// Unit Tests for Responses Error Handling
//
// UNIT UNDER TEST: ResponsesError
//
// BUSINESS RESPONSIBILITY:
//   - Represents every failure as one of a closed set of kinds
//   - Categorizes errors for routing and severity for alerting
//   - Tells callers which failures are worth retrying (the adapter never retries)
//   - Produces user-facing messages that never leak credentials
//   - Preserves underlying causes and, for schema violations, the raw output
//
// TEST COVERAGE:
//   - Kind, category, severity and retryability per variant
//   - User messages, including retry-after guidance
//   - Source chaining for transport and server errors
//   - Output text retention on schema violations

use crate::error::{ErrorCategory, ErrorKind, ErrorSeverity, ResponsesError};
use std::error::Error as _;

#[cfg(test)]
mod error_classification_tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_fatal_client_error() {
        // Arrange & Act
        let error = ResponsesError::missing_credential("OPENAI_API_KEY is not set");

        // Assert
        assert_eq!(error.kind(), ErrorKind::MissingCredential);
        assert_eq!(error.category(), ErrorCategory::Client);
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_invalid_request_is_not_retryable() {
        let error = ResponsesError::invalid_request("Prompt must not be empty");

        assert_eq!(error.kind(), ErrorKind::InvalidRequest);
        assert_eq!(error.category(), ErrorCategory::Client);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_auth_failure_keeps_status() {
        let error = ResponsesError::auth_failure(403, "Forbidden");

        assert_eq!(error.kind(), ErrorKind::AuthFailure);
        assert!(!error.is_retryable());
        match error {
            ResponsesError::AuthFailure { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected AuthFailure, got: {:?}", other),
        }
    }

    #[test]
    fn test_transient_errors_are_retryable() {
        // The adapter does not retry, but callers may
        let errors = vec![
            ResponsesError::rate_limited(Some(5), "Slow down"),
            ResponsesError::transport_failure("Connection refused", None),
            ResponsesError::server_error(502, "Bad gateway", None),
        ];

        for error in errors {
            assert!(error.is_retryable(), "{} should be retryable", error.kind());
        }
    }

    #[test]
    fn test_schema_violation_is_external_and_not_retryable() {
        let error = ResponsesError::schema_violation("missing field", Some("{}".to_string()));

        assert_eq!(error.kind(), ErrorKind::SchemaViolation);
        assert_eq!(error.category(), ErrorCategory::External);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_kind_display_matches_variant_name() {
        assert_eq!(ErrorKind::RateLimited.to_string(), "RateLimited");
        assert_eq!(ErrorKind::SchemaViolation.to_string(), "SchemaViolation");
    }
}

#[cfg(test)]
mod error_message_tests {
    use super::*;

    #[test]
    fn test_rate_limited_user_message_mentions_wait_time() {
        let error = ResponsesError::rate_limited(Some(30), "Too many requests");

        assert_eq!(
            error.user_message(),
            "Service is busy. Please wait 30 seconds and try again"
        );
    }

    #[test]
    fn test_rate_limited_without_retry_after() {
        let error = ResponsesError::rate_limited(None, "Too many requests");

        assert_eq!(error.user_message(), "Service is busy. Please try again later");
        assert_eq!(error.to_string(), "Rate limited: Too many requests");
    }

    #[test]
    fn test_missing_credential_message_names_variable() {
        let error = ResponsesError::missing_credential("not found");

        assert!(error.user_message().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_auth_user_message_does_not_echo_details() {
        // Endpoint messages can quote part of the key
        let error = ResponsesError::auth_failure(401, "Incorrect API key provided: sk-abc***");

        assert!(!error.user_message().contains("sk-abc"));
    }

    #[test]
    fn test_display_includes_status_for_server_error() {
        let error = ResponsesError::server_error(503, "Overloaded", None);

        assert_eq!(error.to_string(), "Server error (503): Overloaded");
    }
}

#[cfg(test)]
mod error_cause_tests {
    use super::*;

    #[test]
    fn test_transport_failure_preserves_source() {
        // Arrange
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

        // Act
        let error = ResponsesError::transport_failure("Connection failed", Some(Box::new(cause)));

        // Assert
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_schema_violation_retains_output_text() {
        let error = ResponsesError::schema_violation("not JSON", Some("plain text".to_string()));

        assert_eq!(error.output_text(), Some("plain text"));
    }

    #[test]
    fn test_output_text_absent_for_other_kinds() {
        let error = ResponsesError::invalid_request("bad");

        assert_eq!(error.output_text(), None);
    }
}
