//! keyprobe: send one prompt with the shell-loaded credential and print the reply.

use anyhow::Result;
use clap::Parser;
use keyprobe_config::{CliOverrides, ProbeConfig};
use keyprobe_types::ProbeError;
use std::io;

/// Prompt used when none is given on the command line.
const DEFAULT_PROMPT: &str = "What is 2+2?";

#[derive(Parser)]
#[command(
    name = "keyprobe",
    version,
    about = "Check that ANTHROPIC_AUTH_TOKEN reaches the Messages API"
)]
struct Cli {
    /// Prompt to send
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// API base URL (overrides ANTHROPIC_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let overrides = CliOverrides {
        base_url: cli.base_url,
    };

    // Errors are reported, not propagated: the process exits 0 either way.
    let result = probe(overrides, &cli.prompt).await;
    if let Err(e) = &result {
        tracing::debug!("Probe failed: {e:?}");
    }
    println!("{}", report(&result)?);

    Ok(())
}

/// Render the single line printed for a probe outcome.
fn report(result: &Result<serde_json::Value, ProbeError>) -> serde_json::Result<String> {
    Ok(match result {
        Ok(value) => format!("Success: {}", serde_json::to_string(value)?),
        Err(e) => format!("Error: {e}"),
    })
}

async fn probe(overrides: CliOverrides, prompt: &str) -> Result<serde_json::Value, ProbeError> {
    let config = ProbeConfig::load(overrides)?;
    tracing::debug!("Loaded config: {config:?}");
    keyprobe_api::call_with_config(&config, prompt).await
}
