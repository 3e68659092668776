//! OpenAiClient implementation using the OpenAI REST API.

use async_trait::async_trait;
use quote_core::{
    AssistantError, Completion, CompletionClient, FilePurpose, FileStore, Message, StoredFile,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use std::path::Path;
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiConfig;

/// Chat-completion and file-storage client for the OpenAI API.
///
/// Holds no per-call state, so a single instance can be shared across
/// every workflow.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, AssistantError> {
        if config.api_key.is_empty() {
            return Err(AssistantError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "OpenAiClient initialized with model: {}, api_url: {}",
            config.model, config.api_url
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.bearer_auth(&self.config.api_key);
        match self.config.organization {
            Some(ref org) => request.header("OpenAI-Organization", org),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AssistantError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiError>(&error_text) {
            Ok(api_error) => api_error.error.message,
            Err(_) => error_text,
        };

        Err(AssistantError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn create_completion(&self, messages: &[Message]) -> Result<Completion, AssistantError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending chat completion request: {:?}", request);

        let response = self
            .send(self.client.post(self.config.chat_completions_url()).json(&request))
            .await?;
        let status = response.status().as_u16();

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| AssistantError::Api {
                status,
                message: format!("Failed to parse response: {}", e),
            })?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(completion.into())
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl FileStore for OpenAiClient {
    async fn upload_file(
        &self,
        path: &Path,
        purpose: FilePurpose,
    ) -> Result<StoredFile, AssistantError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!("Uploading {} ({} bytes) as {}", file_name, bytes.len(), purpose.as_str());

        let form = Form::new()
            .text("purpose", purpose.as_str())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .send(self.client.post(self.config.files_url()).multipart(form))
            .await?;
        let status = response.status().as_u16();

        response.json().await.map_err(|e| AssistantError::Api {
            status,
            message: format!("Failed to parse file object: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        let config = OpenAiConfig::builder().build();
        assert!(matches!(
            OpenAiClient::new(config),
            Err(AssistantError::Configuration(_))
        ));
    }

    #[test]
    fn test_model_from_config() {
        let config = OpenAiConfig::builder()
            .api_key("sk-test")
            .model("gpt-4.1-nano")
            .build();
        let client = OpenAiClient::new(config).unwrap();
        assert_eq!(client.model(), "gpt-4.1-nano");
    }
}
