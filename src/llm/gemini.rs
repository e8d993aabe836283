//! Gemini API client implementation
//!
//! Implements [`DescriptionProvider`] on top of the `generateContent` REST
//! endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::{Result, TooldexError};
use crate::llm::client::{DescriptionProvider, build_prompt};
use crate::llm::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse, Usage};

/// Gemini REST base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable consulted first for the credential
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Fallback credential variable
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl From<&ProviderConfig> for GeminiConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Read the first non-empty variable among `candidates`.
///
/// The error names the first candidate, which is the one users configure.
pub fn resolve_api_key(candidates: &[&str]) -> Result<String> {
    for name in candidates {
        if let Ok(value) = std::env::var(name)
            && !value.trim().is_empty()
        {
            log::debug!("Using provider credential from {}", name);
            return Ok(value);
        }
    }

    Err(TooldexError::MissingApiKey {
        env_var: candidates.first().copied().unwrap_or(DEFAULT_API_KEY_ENV).to_string(),
    })
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
    usage: Arc<Mutex<Usage>>,
}

impl GeminiClient {
    /// Create a client reading the credential from `api_key_env`, then
    /// `GEMINI_API_KEY`
    pub fn from_env(api_key_env: &str, config: GeminiConfig) -> Result<Self> {
        let api_key = resolve_api_key(&[api_key_env, FALLBACK_API_KEY_ENV])?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TooldexError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
            usage: Arc::new(Mutex::new(Usage::default())),
        })
    }

    /// Endpoint for the configured model
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the request body for one tool
    fn build_request(&self, tool_name: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(build_prompt(tool_name))
    }

    /// Pull the description text out of a response body
    fn parse_response(&self, body: GenerateContentResponse) -> Result<String> {
        if let Some(usage) = &body.usage_metadata
            && let Ok(mut total) = self.usage.lock()
        {
            total.add(usage);
            log::debug!("Token usage so far: {} total", total.total());
        }

        match body.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(TooldexError::InvalidResponse(format!(
                "no text in response (finish reason: {})",
                body.finish_reason().unwrap_or("none")
            ))),
        }
    }

    /// Send a request to the Gemini API
    async fn send_request(&self, body: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| TooldexError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&error_body)
                .map(|b| b.error.message)
                .unwrap_or(error_body);
            return Err(TooldexError::Provider(format!("API error {}: {}", status, message)));
        }

        response
            .json()
            .await
            .map_err(|e| TooldexError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    /// Get cumulative token usage
    pub fn total_usage(&self) -> Usage {
        self.usage.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DescriptionProvider for GeminiClient {
    async fn describe(&self, tool_name: &str) -> Result<String> {
        let body = self.build_request(tool_name);
        let response = self.send_request(&body).await?;
        self.parse_response(response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn usage(&self) -> Usage {
        self.total_usage()
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
