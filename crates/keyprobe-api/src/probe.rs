//! One-shot probe: resolve configuration, then send a single prompt.

use keyprobe_config::{CliOverrides, ProbeConfig};
use keyprobe_types::ProbeError;

use crate::client::ApiClient;

/// Send `prompt` using the credential and base URL from the process environment.
///
/// Fails with [`ProbeError::Config`] before any network activity if
/// `ANTHROPIC_AUTH_TOKEN` is not set.
pub async fn call_api(prompt: &str) -> Result<serde_json::Value, ProbeError> {
    call_api_with(|key| std::env::var(key).ok(), prompt).await
}

/// Like [`call_api`], reading variables through `lookup`.
pub async fn call_api_with<F>(lookup: F, prompt: &str) -> Result<serde_json::Value, ProbeError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ProbeConfig::from_lookup(lookup, CliOverrides::default())?;
    call_with_config(&config, prompt).await
}

/// Send `prompt` with already-resolved configuration.
pub async fn call_with_config(
    config: &ProbeConfig,
    prompt: &str,
) -> Result<serde_json::Value, ProbeError> {
    let client = ApiClient::from_config(config)?;
    Ok(client.call(prompt).await?)
}
