//! Mock language-model clients for testing quote workflows.
//!
//! This crate provides mock implementations of the `quote-core` traits:
//! - `EchoClient` - Replies with the last user turn
//! - `ScriptedClient` - Replays queued replies and records every request
//! - `MemoryFileStore` - Hands out sequential file ids without network access
//!
//! For production use, see the `openai-client` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_llm::{CompletionClient, Message, ScriptedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_llm::AssistantError> {
//!     let client = ScriptedClient::new(["Aço 1045"]);
//!
//!     let completion = client.create_completion(&[Message::user("Material?")]).await?;
//!     assert_eq!(completion.first_content(), Some("Aço 1045"));
//!     assert_eq!(client.requests().await.len(), 1);
//!     Ok(())
//! }
//! ```

mod echo;
mod files;
mod scripted;

// Re-export quote-core types for convenience
pub use quote_core::{
    async_trait, AssistantError, Completion, CompletionClient, FilePurpose, FileStore, Message,
    Role, StoredFile,
};

pub use echo::EchoClient;
pub use files::MemoryFileStore;
pub use scripted::{ScriptedClient, ScriptedReply};
