//! Basic example demonstrating a single prompt and its formatted response.
//!
//! This example shows how to:
//! - Load `OPENAI_API_KEY` from the environment or a `.env` file
//! - Send a prompt with no instructions
//! - Print the normalized response
//!
//! # Running
//!
//! ```bash
//! echo 'OPENAI_API_KEY=sk-...' > .env
//! cargo run --example basic_response
//! ```

use responses_adapter::{
    format_response, OpenAIResponsesClient, ResponseRequest, ResponsesApi, ResponsesConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first, then .env; nothing already set is overridden
    let config = ResponsesConfig::from_env(&[".env"])?;
    let client = OpenAIResponsesClient::new(config)?;

    let request = ResponseRequest::new("What is the capital of France? Answer in one sentence.");

    println!("Sending request to the Responses API...\n");

    let response = client.create_response(&request).await?;

    print!("{}", format_response(&response));

    Ok(())
}
