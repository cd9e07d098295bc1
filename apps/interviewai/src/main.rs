//! # InterviewAI
//!
//! Entry point for the `interviewai` binary.
//!
//! Logs go to stderr through `tracing-subscriber`; set `RUST_LOG` to change
//! the level (default `info`). Page output from `render` goes to stdout.

use std::process::ExitCode;

use clap::Parser;
use interviewai::cli::{self, Cli};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
