//! Industrial quoting workflows on top of a chat-completion provider.
//!
//! This crate provides:
//!
//! - [`QuoteAssistant`] - completion calls, four-step technical drawing
//!   analysis, email classification and file upload
//! - [`QuoteConversations`] - per-quote chats kept in memory
//! - [`DrawingSummary`] / [`EmailClassification`] - opt-in parsers for the
//!   JSON the model is asked to produce
//!
//! # Usage
//!
//! ```rust,no_run
//! use quote_assistant::QuoteAssistant;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assistant = QuoteAssistant::from_env()?;
//!
//!     let file_id = assistant.file_upload("desenho.pdf").await?;
//!     let analysis = assistant.analyze_drawing(&file_id, 10).await?;
//!
//!     println!("{}", analysis.primary());
//!     println!("{}", analysis.summary);
//!     Ok(())
//! }
//! ```

mod analysis;
mod assistant;
mod config;
mod conversation;
pub mod prompts;
mod replies;

pub use analysis::DrawingAnalysis;
pub use assistant::{QuoteAssistant, NO_RESPONSE};
pub use config::{AssistantConfig, AssistantConfigBuilder, DEFAULT_PROMPT_FILE};
pub use conversation::{AnyQuote, QuoteConversations, QuoteDirectory};
pub use replies::{Dimensions, DrawingSummary, EmailClassification, ProcessEstimate, Shape};

// Re-export quote-core types for convenience
pub use quote_core::{
    async_trait, AssistantError, CompletionClient, FileStore, Message, QuoteId, Role,
};
