//! Configuration for the OpenAI client.

use quote_core::AssistantError;
use std::env;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.openai.com";

/// Model every request is issued against unless overridden.
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Configuration for [`OpenAiClient`](crate::OpenAiClient).
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API base URL (without the `/v1` suffix).
    pub api_url: String,

    /// API key for bearer authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Optional organization header.
    pub organization: Option<String>,

    /// Maximum tokens for a response. Provider default when unset.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0). Provider default when unset.
    pub temperature: Option<f32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            organization: None,
            max_tokens: None,
            temperature: None,
        }
    }
}

impl OpenAiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENAI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_URL` - API URL (default: https://api.openai.com)
    /// - `OPENAI_MODEL` - Model name (default: gpt-4.1)
    /// - `OPENAI_ORG_ID` - Organization id sent as `OpenAI-Organization`
    /// - `OPENAI_MAX_TOKENS` - Max tokens (default: provider default)
    /// - `OPENAI_TEMPERATURE` - Temperature (default: provider default)
    pub fn from_env() -> Result<Self, AssistantError> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AssistantError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        let api_url = env::var("OPENAI_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let organization = env::var("OPENAI_ORG_ID").ok();

        let max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            model,
            organization,
            max_tokens,
            temperature,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }

    /// Chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url)
    }

    /// File storage endpoint.
    pub fn files_url(&self) -> String {
        format!("{}/v1/files", self.api_url)
    }
}

/// Builder for OpenAiConfig.
#[derive(Debug, Default)]
pub struct OpenAiConfigBuilder {
    config: OpenAiConfig,
}

impl OpenAiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the organization id.
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.config.organization = Some(org.into());
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenAiConfig {
        self.config
    }
}
