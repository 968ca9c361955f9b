//! # responses-adapter
//!
//! Typed client adapter for the hosted OpenAI Responses API.
//!
//! ## Key Features
//!
//! - **Credential loading**: `OPENAI_API_KEY` from the environment or dotenv files
//! - **Typed requests**: prompt, optional instructions, optional JSON-schema contract
//! - **Normalized responses**: id, model, creation time, output text, token usage
//! - **Structured output**: JSON Schema validation of the returned text
//! - **Closed error set**: every failure is one [`ResponsesError`] kind
//!
//! ## Example
//!
//! ```rust,no_run
//! use responses_adapter::{
//!     format_response, OpenAIResponsesClient, ResponseRequest, ResponsesApi, ResponsesConfig,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ResponsesConfig::from_env(&[".env"])?;
//! let client = OpenAIResponsesClient::new(config)?;
//!
//! let request = ResponseRequest::new("Hello").with_instructions("Answer in one sentence.");
//! let response = client.create_response(&request).await?;
//! println!("{}", format_response(&response));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod providers;
pub mod response_parser;

#[cfg(test)]
mod tests;

pub use config::{
    load_credential, load_credential_into_env, parse_dotenv, read_dotenv_files, Credential,
    DotenvMap, ResponsesConfig, API_KEY_VAR, DEFAULT_MODEL,
};
pub use core_types::{
    NormalizedResponse, ResponseRequest, ResponsesApi, StructuredOutputSchema, TokenUsage,
};
pub use error::{ErrorCategory, ErrorKind, ErrorSeverity, ResponsesError, ResponsesResult};
pub use formatter::{format_response, parse_formatted};
pub use providers::OpenAIResponsesClient;
pub use response_parser::{parse_structured, validate_strict_output};
