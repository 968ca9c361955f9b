//! Responses endpoint implementations
//!
//! - **openai**: client for the hosted OpenAI Responses API
//! - **openai_shared**: wire structures, conversion helpers and HTTP plumbing

pub mod openai;
pub mod openai_shared;

pub use openai::OpenAIResponsesClient;
