//! Core types for the Responses adapter
//!
//! ## Organization
//! - `request` - Immutable request record and structured-output contract
//! - `response` - Normalized response record and token usage
//! - `provider` - The `ResponsesApi` trait collaborators depend on

pub mod provider;
pub mod request;
pub mod response;

pub use provider::ResponsesApi;
pub use request::{ResponseRequest, StructuredOutputSchema};
pub use response::{NormalizedResponse, TokenUsage};
