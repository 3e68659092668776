//! OpenAI client for the quote assistant.
//!
//! This crate implements the [`CompletionClient`] and [`FileStore`] traits
//! from `quote-core` against the OpenAI REST API.
//!
//! # Features
//!
//! - Chat completions against a fixed model (default `gpt-4.1`)
//! - File uploads to provider storage, referenced later by id
//! - Provider error bodies decoded into [`AssistantError::Api`]
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use openai_client::OpenAiClient;
//! use quote_core::{CompletionClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::from_env()?;
//!     let completion = client.create_completion(&[Message::user("Olá")]).await?;
//!     println!("{:?}", completion.first_content());
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::{OpenAiConfig, OpenAiConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};

// Re-export quote-core types for convenience
pub use quote_core::{
    async_trait, AssistantError, Completion, CompletionClient, FilePurpose, FileStore, Message,
    Role, StoredFile,
};
