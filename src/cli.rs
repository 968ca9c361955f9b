//! Command-line front end for a single Responses request.

use crate::config::{ResponsesConfig, DEFAULT_DOTENV_PATH};
use crate::core_types::provider::ResponsesApi;
use crate::core_types::request::{ResponseRequest, StructuredOutputSchema};
use crate::error::{ResponsesError, ResponsesResult};
use crate::formatter::format_response;
use crate::providers::OpenAIResponsesClient;
use crate::response_parser::parse_structured;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Send one prompt to the OpenAI Responses API and print the result.
#[derive(Debug, Clone, Parser)]
#[command(name = "responses", version, about)]
pub struct Cli {
    /// Prompt text
    pub prompt: String,

    /// System-style instructions sent ahead of the prompt
    #[arg(short, long)]
    pub instructions: Option<String>,

    /// JSON Schema file the output must satisfy
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Name reported for the schema
    #[arg(long, default_value = "structured_output")]
    pub schema_name: String,

    /// Ask for schema-shaped output without enforcing it
    #[arg(long)]
    pub no_strict: bool,

    /// Model identifier (defaults to OPENAI_MODEL or gpt-4o)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Dotenv files searched for OPENAI_API_KEY, in order
    #[arg(long = "env-file", value_name = "PATH", default_value = DEFAULT_DOTENV_PATH)]
    pub env_files: Vec<PathBuf>,

    /// Print the normalized response as JSON instead of the text block
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the request described by the arguments.
    pub fn build_request(&self) -> ResponsesResult<ResponseRequest> {
        let mut request = ResponseRequest::new(self.prompt.clone());
        if let Some(instructions) = &self.instructions {
            request = request.with_instructions(instructions.clone());
        }
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        if let Some(path) = &self.schema {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                ResponsesError::invalid_request(format!(
                    "Cannot read schema file {}: {e}",
                    path.display()
                ))
            })?;
            let schema = serde_json::from_str(&contents).map_err(|e| {
                ResponsesError::invalid_request(format!(
                    "Schema file {} is not JSON: {e}",
                    path.display()
                ))
            })?;
            request = request.with_schema(
                StructuredOutputSchema::new(self.schema_name.clone(), schema)
                    .with_strict(!self.no_strict),
            );
        }
        Ok(request)
    }
}

/// Output rendering for [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Issue `request` through `api` and render the outcome.
///
/// In text mode a structured value, when a schema was requested and the
/// output parses, is appended after the formatted block.
pub async fn run(
    api: &dyn ResponsesApi,
    request: &ResponseRequest,
    mode: OutputMode,
) -> ResponsesResult<String> {
    let response = api.create_response(request).await?;

    match mode {
        OutputMode::Json => Ok(format!("{}\n", to_pretty_json(&response)?)),
        OutputMode::Text => {
            let mut rendered = format_response(&response);
            if let Some(schema) = request.schema() {
                match parse_structured(&response, schema) {
                    Ok(value) => {
                        rendered.push_str("\nStructured Output:\n");
                        rendered.push_str(&to_pretty_json(&value)?);
                        rendered.push('\n');
                    }
                    Err(e) if schema.strict => return Err(e),
                    Err(_) => {}
                }
            }
            Ok(rendered)
        }
    }
}

/// Pretty-print `value` as JSON.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> ResponsesResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ResponsesError::invalid_request(format!("Cannot render output as JSON: {e}"))
    })
}

/// Process exit code for an argument parsing outcome.
///
/// Help and version requests succeed; every usage error maps to the same
/// failure code as a request error.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Load configuration, build the client and run the request.
pub async fn execute(cli: &Cli) -> ResponsesResult<String> {
    let request = cli.build_request()?;
    let config = ResponsesConfig::from_env(cli.env_files.as_slice())?;
    let client = OpenAIResponsesClient::new(config)?;
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    run(&client, &request, mode).await
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
