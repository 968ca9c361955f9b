// Test modules for responses-adapter
//
// Each source file has a corresponding test file that focuses on
// behaviour rather than implementation details.

// Shared fixtures
pub mod helpers;

pub mod error;
pub mod request;
