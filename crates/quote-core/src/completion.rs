//! Chat-completion provider interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;
use crate::message::Message;

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One candidate reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionChoice {
    /// Position of the choice in the provider response.
    pub index: u32,
    /// Reply text; `None` when the provider sent null or omitted it.
    pub content: Option<String>,
    /// Refusal text, if the model declined.
    pub refusal: Option<String>,
    /// Why generation stopped.
    pub finish_reason: Option<String>,
}

/// Provider-neutral chat completion result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Provider response id.
    pub id: String,
    /// Model that produced the reply.
    pub model: String,
    /// Candidate replies, in provider order.
    pub choices: Vec<CompletionChoice>,
    /// Token usage, when reported.
    pub usage: Option<TokenUsage>,
}

impl Completion {
    /// Build a completion with a single choice holding `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice {
                content: Some(text.into()),
                finish_reason: Some("stop".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// Text of the first choice, if the provider returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// A remote chat-completion endpoint.
///
/// Implementations are expected to be cheap to share: one client is reused
/// across every call and holds no per-call state.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the ordered `messages` and return the provider's completion.
    async fn create_completion(&self, messages: &[Message]) -> Result<Completion, AssistantError>;

    /// Model identifier requests are issued against.
    fn model(&self) -> &str;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for std::sync::Arc<T> {
    async fn create_completion(&self, messages: &[Message]) -> Result<Completion, AssistantError> {
        (**self).create_completion(messages).await
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_content_present() {
        let completion = Completion::from_text("42 mm");
        assert_eq!(completion.first_content(), Some("42 mm"));
    }

    #[test]
    fn test_first_content_absent() {
        assert_eq!(Completion::default().first_content(), None);

        let completion = Completion {
            choices: vec![CompletionChoice::default()],
            ..Default::default()
        };
        assert_eq!(completion.first_content(), None);
    }

    #[test]
    fn test_first_content_ignores_later_choices() {
        let completion = Completion {
            choices: vec![
                CompletionChoice::default(),
                CompletionChoice {
                    index: 1,
                    content: Some("second".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(completion.first_content(), None);
    }
}
