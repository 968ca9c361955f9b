//! Shared OpenAI Responses API structures and utilities
//!
//! - `types` - Wire request/response structures
//! - `utils` - Request building, output extraction and the HTTP client

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
pub use utils::*;
