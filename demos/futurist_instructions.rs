//! Instructions example: an optimistic futurist answering in Japanese.
//!
//! This example shows how to:
//! - Attach instructions, which are sent as a system message ahead of the prompt
//! - Read the instructions echo returned by the endpoint
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example futurist_instructions
//! ```

use responses_adapter::{
    format_response, OpenAIResponsesClient, ResponseRequest, ResponsesApi, ResponsesConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ResponsesConfig::from_env(&[".env"])?;
    let client = OpenAIResponsesClient::new(config)?;

    let request = ResponseRequest::new("AIの未来について教えてください。")
        .with_instructions("あなたは楽観的な未来学者です。");

    let response = client.create_response(&request).await?;

    print!("{}", format_response(&response));

    match &response.instructions {
        Some(echo) => println!("\nEndpoint echoed instructions: {}", echo),
        None => println!("\nEndpoint did not echo instructions"),
    }

    Ok(())
}
