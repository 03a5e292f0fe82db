//! Anthropic Messages API client for keyprobe.

mod client;
mod probe;

pub use client::ApiClient;
pub use probe::{call_api, call_api_with, call_with_config};
