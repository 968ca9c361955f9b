//! Structured output example: extracting a calendar event.
//!
//! This example shows how to:
//! - Request output that must match a strict JSON Schema
//! - Parse the returned text into a typed value
//! - Recover the raw output when the model does not comply
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example calendar_event
//! ```

use responses_adapter::{
    OpenAIResponsesClient, ResponseRequest, ResponsesApi, ResponsesConfig, ResponsesError,
    StructuredOutputSchema,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct CalendarEvent {
    name: String,
    date: String,
    participants: Vec<String>,
}

fn calendar_event_schema() -> StructuredOutputSchema {
    StructuredOutputSchema::new(
        "calendar_event",
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "date": { "type": "string" },
                "participants": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["name", "date", "participants"],
            "additionalProperties": false
        }),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ResponsesConfig::from_env(&[".env"])?;
    let client = OpenAIResponsesClient::new(config)?;

    let schema = calendar_event_schema();
    let request = ResponseRequest::new("Alice and Bob are going to a science fair on Friday.")
        .with_instructions("Extract the event information.")
        .with_schema(schema.clone());

    // Strict schemas are validated before the response is returned
    let response = match client.create_response(&request).await {
        Ok(response) => response,
        Err(ResponsesError::SchemaViolation {
            message,
            output_text,
        }) => {
            println!("Model output did not match the schema: {}", message);
            if let Some(raw) = output_text {
                println!("Raw output:\n{}", raw);
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let value = response.structured(&schema)?;
    let event: CalendarEvent = serde_json::from_value(value)?;

    println!("Event: {}", event.name);
    println!("Date: {}", event.date);
    println!("Participants: {}", event.participants.join(", "));
    println!(
        "\nToken usage: {} input + {} output = {} total",
        response.usage.input_tokens, response.usage.output_tokens, response.usage.total_tokens
    );

    Ok(())
}
