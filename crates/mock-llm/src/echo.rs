//! Echo client - replies with the last user turn.

use async_trait::async_trait;
use quote_core::{AssistantError, Completion, CompletionClient, Message, Role};

/// A client that echoes the most recent user message back.
///
/// Useful for exercising conversation flows without any model.
#[derive(Debug, Clone, Default)]
pub struct EchoClient {
    prefix: Option<String>,
}

impl EchoClient {
    /// Create a new EchoClient with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoClient that prepends `prefix` to every reply.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl CompletionClient for EchoClient {
    async fn create_completion(&self, messages: &[Message]) -> Result<Completion, AssistantError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, last_user),
            None => last_user.to_string(),
        };

        Ok(Completion::from_text(text))
    }

    fn model(&self) -> &str {
        "echo"
    }
}
