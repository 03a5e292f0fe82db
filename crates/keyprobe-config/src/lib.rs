//! Environment-driven configuration for keyprobe.
//!
//! Reads configuration with precedence:
//! CLI flags > env vars > defaults
//!
//! The credential has no default. Resolving it is the only fallible step
//! and always happens before a client is built.

use std::fmt;

use keyprobe_types::ConfigError;

/// Environment variable holding the API credential.
pub const AUTH_TOKEN_VAR: &str = "ANTHROPIC_AUTH_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

/// The default Anthropic API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com";

/// The model every probe request is sent to.
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";

/// The max tokens for a probe response.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Shown when the credential is missing from the environment.
const MISSING_TOKEN_HINT: &str = "The credential is not loaded.\n\
    Run: eval \"$(keychain-cli load --format export)\"\n\
    or launch through: ~/start-claude.sh keyprobe";

/// Resolved configuration for a probe call.
#[derive(Clone)]
pub struct ProbeConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

/// CLI overrides that take highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
}

impl ProbeConfig {
    /// Load configuration from the process environment.
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Resolve configuration from `lookup` instead of the process environment.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, overrides: CliOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_key = non_empty(AUTH_TOKEN_VAR).ok_or_else(|| ConfigError::MissingKey {
            key: AUTH_TOKEN_VAR.into(),
            hint: MISSING_TOKEN_HINT.into(),
        })?;

        // Resolve API base URL: CLI > env > default
        let api_base_url = overrides
            .base_url
            .filter(|v| !v.is_empty())
            .or_else(|| non_empty(BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        tracing::debug!("Resolved API base URL: {api_base_url}");

        Ok(Self {
            api_key,
            api_base_url,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// The fully qualified Messages endpoint.
    pub fn endpoint(&self) -> String {
        messages_endpoint(&self.api_base_url)
    }
}

impl fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Build the Messages endpoint for `base_url`.
///
/// Trailing slashes on `base_url` are dropped so the path is never `//v1`.
/// This is the only place the base URL is normalized.
pub fn messages_endpoint(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}
