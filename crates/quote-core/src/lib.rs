//! Core traits and types for the quote assistant.
//!
//! This crate provides the shared interface between the language-model
//! provider clients and the quoting workflows. It defines:
//!
//! - [`Message`] / [`Role`] - Role-tagged chat turns
//! - [`CompletionClient`] - The trait every chat-completion provider implements
//! - [`FileStore`] - The trait for provider-side file storage
//! - [`AssistantError`] - Error types shared by all crates
//! - [`ConversationHistory`] - Bounded per-quote chat history
//!
//! # Example
//!
//! ```rust
//! use quote_core::{async_trait, AssistantError, Completion, CompletionClient, Message};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl CompletionClient for Canned {
//!     async fn create_completion(&self, _messages: &[Message]) -> Result<Completion, AssistantError> {
//!         Ok(Completion::from_text("Hello!"))
//!     }
//!
//!     fn model(&self) -> &str {
//!         "canned"
//!     }
//! }
//! ```

mod completion;
mod error;
mod files;
mod history;
mod message;
mod prompt;

pub use completion::{Completion, CompletionChoice, CompletionClient, TokenUsage};
pub use error::AssistantError;
pub use files::{FilePurpose, FileStore, StoredFile};
pub use history::{ConversationHistory, QuoteId};
pub use message::{Message, Role};
pub use prompt::{hash_messages, hash_prompt};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
