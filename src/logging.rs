//! Logging aliases for responses-adapter.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary or the embedding application.

pub use tracing::{debug as log_debug, error as log_error, warn as log_warn};
