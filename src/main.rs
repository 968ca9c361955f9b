use clap::Parser;
use responses_adapter::cli::{execute, init_tracing, usage_exit_code, Cli};
use responses_adapter::ErrorKind;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };
    init_tracing(cli.verbose);

    match execute(&cli).await {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{}", err.user_message());
            if err.kind() == ErrorKind::SchemaViolation {
                if let Some(output) = err.output_text() {
                    eprintln!("\nRaw output:\n{output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
