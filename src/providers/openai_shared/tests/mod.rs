//! Tests for OpenAI Responses wire utilities
//!
//! Covers request building, body decoding and output extraction, and the
//! mapping of HTTP statuses onto error kinds.

mod conversion;
