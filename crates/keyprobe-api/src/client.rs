//! Anthropic Messages API client.

use keyprobe_config::{ProbeConfig, messages_endpoint};
use keyprobe_types::{ApiError, CreateMessageRequest};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Client for the Anthropic Messages API.
///
/// Sends one request per call and returns the decoded body untouched.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl ApiClient {
    /// Create a new API client using the default model and token budget.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: keyprobe_config::DEFAULT_MODEL.to_string(),
            max_tokens: keyprobe_config::DEFAULT_MAX_TOKENS,
        })
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ApiError> {
        let mut client = Self::new(&config.api_key, &config.api_base_url)?;
        client.model.clone_from(&config.model);
        client.max_tokens = config.max_tokens;
        Ok(client)
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> String {
        messages_endpoint(&self.base_url)
    }

    /// Send `prompt` as a single user message.
    pub async fn call(&self, prompt: &str) -> Result<serde_json::Value, ApiError> {
        let request = CreateMessageRequest::single_prompt(&self.model, self.max_tokens, prompt);
        self.create_message(&request).await
    }

    /// Send a Messages API request and decode the response body as JSON.
    ///
    /// The HTTP status is not inspected: error payloads from the service are
    /// returned just like successful ones.
    pub async fn create_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint();
        tracing::info!("Using API endpoint: {url}");

        let headers = self.headers()?;
        let body = serde_json::to_string(request).map_err(|e| ApiError::BadRequest {
            message: format!("Failed to serialize request: {e}"),
        })?;

        tracing::debug!("POST {url} ({} bytes)", body.len());

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(transport_error)?;
        tracing::debug!("Response: HTTP {status}, {} bytes", bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            status,
            message: e.to_string(),
        })
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|_| ApiError::Auth {
                message: "Invalid API key format".into(),
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}
