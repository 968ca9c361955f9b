//! Error handling example demonstrating error kinds, categories, and retry decisions.
//!
//! This example shows how to:
//! - Match on the closed set of error kinds
//! - Use error categories for routing decisions
//! - Decide in caller code whether to retry (the adapter never does)
//! - Convert errors to user-friendly messages
//!
//! # Running
//!
//! ```bash
//! # Offline walkthrough of the error types
//! cargo run --example error_handling
//!
//! # Also make a real call with an invalid key:
//! cargo run --example error_handling -- --live
//! ```
//!
//! # Error Categories
//!
//! | Category | Examples | Action |
//! |----------|----------|--------|
//! | Client | Missing key, bad request, auth failed | Fix configuration or input |
//! | Transient | Rate limit, transport, server error | Retry later, honoring retry-after |
//! | External | Schema violation | Inspect raw output, adjust prompt |

use responses_adapter::{
    Credential, ErrorCategory, OpenAIResponsesClient, ResponseRequest, ResponsesApi,
    ResponsesConfig, ResponsesError,
};
use std::time::Duration;

fn sample_errors() -> Vec<ResponsesError> {
    vec![
        ResponsesError::missing_credential("OPENAI_API_KEY is not set"),
        ResponsesError::invalid_request("Prompt must not be empty"),
        ResponsesError::transport_failure("Connection refused", None),
        ResponsesError::auth_failure(401, "Incorrect API key provided"),
        ResponsesError::rate_limited(Some(3), "Rate limit reached"),
        ResponsesError::server_error(503, "Service unavailable", None),
        ResponsesError::schema_violation(
            "Output is not valid JSON",
            Some("Sure! Here's the event.".to_string()),
        ),
    ]
}

/// Print detailed information about an error
fn print_error_info(error: &ResponsesError) {
    println!("{}:", error.kind());
    println!("  Display: {}", error);
    println!("  Category: {:?}", error.category());
    println!("  Severity: {:?}", error.severity());
    println!("  Retryable: {}", error.is_retryable());
    println!("  User message: {}", error.user_message());
    println!();
}

/// Demonstrates category-based error routing
fn demonstrate_error_routing() {
    println!("=== Category-Based Error Routing ===\n");

    for error in sample_errors() {
        let action = match error.category() {
            ErrorCategory::Client => "Fix configuration or input",
            ErrorCategory::Transient => "Retry later",
            ErrorCategory::External => "Inspect the raw output",
        };
        println!("{} -> {}", error.kind(), action);
    }
    println!();
}

/// Caller-side retry delay for a failed request, if one makes sense
fn retry_delay(error: &ResponsesError, attempt: u32) -> Option<Duration> {
    if !error.is_retryable() {
        return None;
    }
    match error {
        ResponsesError::RateLimited {
            retry_after_seconds: Some(seconds),
            ..
        } => Some(Duration::from_secs(*seconds)),
        _ => Some(Duration::from_secs(1u64 << attempt.min(5))),
    }
}

fn demonstrate_retry_decisions() {
    println!("=== Retry Decisions ===\n");

    for error in sample_errors() {
        match retry_delay(&error, 1) {
            Some(delay) => println!("  {} -> RETRY after {:?}", error.kind(), delay),
            None => println!("  {} -> DO NOT RETRY", error.kind()),
        }
    }
    println!();
}

/// Demonstrates real error handling with an invalid key
async fn demonstrate_real_error_handling() -> Result<(), ResponsesError> {
    println!("=== Real Error Handling Example ===\n");

    let config = ResponsesConfig::new(Credential::new("sk-invalid-key-for-demo"));
    let client = OpenAIResponsesClient::new(config)?;

    println!("Attempting request with invalid API key...\n");

    match client.create_response(&ResponseRequest::new("Hello!")).await {
        Ok(response) => println!("Unexpected success: {}", response.output_text),
        Err(error) => {
            println!("Error occurred (expected):");
            print_error_info(&error);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let run_live = std::env::args().any(|arg| arg == "--live");

    println!("=== Error Kinds ===\n");
    for error in sample_errors() {
        print_error_info(&error);
    }

    demonstrate_error_routing();
    demonstrate_retry_decisions();

    if run_live {
        demonstrate_real_error_handling().await?;
    } else {
        println!("=== Live Test Skipped ===\n");
        println!("Run with --live flag to test with an actual API call:");
        println!("  cargo run --example error_handling -- --live\n");
    }

    Ok(())
}
