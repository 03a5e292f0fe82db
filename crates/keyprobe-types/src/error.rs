//! Error hierarchy for keyprobe.

use thiserror::Error;

/// Top-level error type for a probe call.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while sending a request or decoding its response.
///
/// HTTP error statuses are not represented here: the response body is
/// handed back to the caller whatever the status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response (HTTP {status}) is not valid JSON: {message}")]
    Decode { status: u16, message: String },
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}\n{hint}")]
    MissingKey { key: String, hint: String },
}
