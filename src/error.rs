//! Error types for Responses API operations.
//!
//! Every failure the adapter can produce is a [`ResponsesError`]. The
//! variants form a closed set of kinds:
//!
//! | Variant | Trigger | Category | Retryable |
//! |---------|---------|----------|-----------|
//! | `MissingCredential` | No key in env or dotenv | Client | No |
//! | `InvalidRequest` | Empty prompt, malformed schema, 4xx | Client | No |
//! | `AuthFailure` | 401/403 | Client | No |
//! | `RateLimited` | 429 | Transient | Yes |
//! | `TransportFailure` | Network, DNS, TLS, timeout | Transient | Yes |
//! | `ServerError` | 5xx, undecodable body | External | Yes |
//! | `SchemaViolation` | Output does not parse or validate | External | No |
//!
//! The adapter never retries on its own; [`ResponsesError::is_retryable`] is
//! guidance for callers.
//!
//! # Example
//!
//! ```rust
//! use responses_adapter::{ErrorKind, ResponsesError};
//!
//! let err = ResponsesError::rate_limited(Some(30), "Too many requests");
//! assert_eq!(err.kind(), ErrorKind::RateLimited);
//! assert!(err.is_retryable());
//! println!("{}", err.user_message());
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Boxed underlying cause carried by transport and server errors.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Convenient result type for adapter operations.
pub type ResponsesResult<T> = std::result::Result<T, ResponsesError>;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller can fix this: credentials, request contents.
    Client,

    /// The hosted endpoint misbehaved or produced unusable output.
    External,

    /// Temporary failure; the caller may try again later.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed and needs attention.
    Error,

    /// Unexpected but recoverable.
    Warning,
}

/// Fieldless tag for each [`ResponsesError`] variant.
///
/// Handy in `match` arms and assertions where the payload is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCredential,
    InvalidRequest,
    TransportFailure,
    AuthFailure,
    RateLimited,
    ServerError,
    SchemaViolation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::MissingCredential => "MissingCredential",
            ErrorKind::InvalidRequest => "InvalidRequest",
            ErrorKind::TransportFailure => "TransportFailure",
            ErrorKind::AuthFailure => "AuthFailure",
            ErrorKind::RateLimited => "RateLimited",
            ErrorKind::ServerError => "ServerError",
            ErrorKind::SchemaViolation => "SchemaViolation",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading credentials, calling the Responses
/// endpoint, or interpreting its output.
///
/// Use the constructor methods rather than building variants by hand; they
/// emit a structured `tracing` event at the matching level.
#[derive(Error, Debug)]
pub enum ResponsesError {
    /// No credential was found in the environment or any dotenv file.
    #[error("Missing credential: {message}")]
    MissingCredential {
        /// Which variable was looked up and where.
        message: String,
    },

    /// The request was rejected before or by the endpoint.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("Transport failure: {message}")]
    TransportFailure {
        /// Description of the failure.
        message: String,
        /// The underlying network error, if available.
        #[source]
        source: Option<BoxedCause>,
    },

    /// The endpoint refused the credential.
    #[error("Authentication failed ({status}): {message}")]
    AuthFailure {
        /// HTTP status, 401 or 403.
        status: u16,
        /// Message reported by the endpoint.
        message: String,
    },

    /// The endpoint is throttling this credential.
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Value of the `retry-after` header, when the endpoint sent one.
        retry_after_seconds: Option<u64>,
        /// Message reported by the endpoint.
        message: String,
    },

    /// The endpoint failed or returned something that is not a response.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status of the failing response.
        status: u16,
        /// Message reported by the endpoint, or the decode failure.
        message: String,
        /// The underlying decode error, if any.
        #[source]
        source: Option<BoxedCause>,
    },

    /// Output did not parse as JSON or did not match the requested schema.
    #[error("Schema violation: {message}")]
    SchemaViolation {
        /// Validation details.
        message: String,
        /// The offending output, retained for diagnostics.
        output_text: Option<String>,
    },
}

impl ResponsesError {
    /// The fieldless kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::TransportFailure { .. } => ErrorKind::TransportFailure,
            Self::AuthFailure { .. } => ErrorKind::AuthFailure,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::ServerError { .. } => ErrorKind::ServerError,
            Self::SchemaViolation { .. } => ErrorKind::SchemaViolation,
        }
    }

    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. } => ErrorCategory::Client,
            Self::InvalidRequest { .. } => ErrorCategory::Client,
            Self::AuthFailure { .. } => ErrorCategory::Client,
            Self::TransportFailure { .. } => ErrorCategory::Transient,
            Self::RateLimited { .. } => ErrorCategory::Transient,
            Self::ServerError { .. } => ErrorCategory::External,
            Self::SchemaViolation { .. } => ErrorCategory::External,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCredential { .. } => ErrorSeverity::Error,
            Self::InvalidRequest { .. } => ErrorSeverity::Warning,
            Self::TransportFailure { .. } => ErrorSeverity::Error,
            Self::AuthFailure { .. } => ErrorSeverity::Error,
            Self::RateLimited { .. } => ErrorSeverity::Warning,
            Self::ServerError { .. } => ErrorSeverity::Error,
            Self::SchemaViolation { .. } => ErrorSeverity::Warning,
        }
    }

    /// Whether a caller may reasonably try the same request again.
    ///
    /// The adapter itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TransportFailure { .. } | Self::RateLimited { .. } | Self::ServerError { .. }
        )
    }

    /// Convert to a message suitable for end users.
    ///
    /// ```rust
    /// use responses_adapter::ResponsesError;
    ///
    /// let err = ResponsesError::missing_credential("OPENAI_API_KEY not set");
    /// assert!(err.user_message().contains("OPENAI_API_KEY"));
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential { .. } => {
                "No API key found. Set OPENAI_API_KEY in the environment or in a .env file"
                    .to_string()
            }
            Self::InvalidRequest { message } => format!("The request was invalid: {message}"),
            Self::TransportFailure { .. } => {
                "Unable to reach the AI service. Check your network and try again".to_string()
            }
            Self::AuthFailure { .. } => {
                "Authentication failed. Please check your OPENAI_API_KEY".to_string()
            }
            Self::RateLimited {
                retry_after_seconds: Some(seconds),
                ..
            } => format!("Service is busy. Please wait {seconds} seconds and try again"),
            Self::RateLimited { .. } => "Service is busy. Please try again later".to_string(),
            Self::ServerError { .. } => {
                "The AI service reported an error. Please try again".to_string()
            }
            Self::SchemaViolation { .. } => {
                "The response did not match the requested output format".to_string()
            }
        }
    }

    /// The output text attached to a schema violation, if any.
    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::SchemaViolation { output_text, .. } => output_text.as_deref(),
            _ => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn missing_credential(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "missing_credential",
            message = %message,
            "No API credential available"
        );
        Self::MissingCredential { message }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_request",
            message = %message,
            "Responses request rejected"
        );
        Self::InvalidRequest { message }
    }

    pub fn transport_failure(message: impl Into<String>, source: Option<BoxedCause>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "transport_failure",
            message = %message,
            has_source = source.is_some(),
            "Responses request could not be delivered"
        );
        Self::TransportFailure { message, source }
    }

    pub fn auth_failure(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "auth_failure",
            status = status,
            message = %message,
            "Responses endpoint rejected the credential"
        );
        Self::AuthFailure { status, message }
    }

    pub fn rate_limited(retry_after_seconds: Option<u64>, message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "rate_limited",
            retry_after_seconds = ?retry_after_seconds,
            message = %message,
            "Responses endpoint rate limit exceeded"
        );
        Self::RateLimited {
            retry_after_seconds,
            message,
        }
    }

    pub fn server_error(status: u16, message: impl Into<String>, source: Option<BoxedCause>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "server_error",
            status = status,
            message = %message,
            has_source = source.is_some(),
            "Responses endpoint failed"
        );
        Self::ServerError {
            status,
            message,
            source,
        }
    }

    pub fn schema_violation(message: impl Into<String>, output_text: Option<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "schema_violation",
            message = %message,
            output_length = output_text.as_ref().map(String::len).unwrap_or(0),
            "Response output failed structured validation"
        );
        Self::SchemaViolation {
            message,
            output_text,
        }
    }
}
