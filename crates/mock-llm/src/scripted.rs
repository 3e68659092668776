//! Scripted client - replays queued replies and records requests.

use async_trait::async_trait;
use quote_core::{AssistantError, Completion, CompletionChoice, CompletionClient, Message};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One queued outcome for [`ScriptedClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// A completion whose first choice carries this text.
    Text(String),
    /// A completion whose first choice has null content.
    Empty,
    /// A completion with no choices at all.
    NoChoices,
    /// A provider error with this status and message.
    Fail { status: u16, message: String },
}

impl From<&str> for ScriptedReply {
    fn from(text: &str) -> Self {
        ScriptedReply::Text(text.to_string())
    }
}

impl From<String> for ScriptedReply {
    fn from(text: String) -> Self {
        ScriptedReply::Text(text)
    }
}

/// A client that answers from a fixed script, in order.
///
/// Every request's message list is recorded so tests can assert on exactly
/// what would have been sent to the provider. Once the script runs out,
/// further calls fail with a network error.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    /// Create a client that will return `replies` in order.
    pub fn new<I, R>(replies: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ScriptedReply>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue another reply at the end of the script.
    pub async fn push(&self, reply: impl Into<ScriptedReply>) {
        self.replies.lock().await.push_back(reply.into());
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().await.clone()
    }

    /// Number of replies not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn create_completion(&self, messages: &[Message]) -> Result<Completion, AssistantError> {
        self.requests.lock().await.push(messages.to_vec());

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| AssistantError::Network("scripted replies exhausted".to_string()))?;

        match reply {
            ScriptedReply::Text(text) => Ok(Completion::from_text(text)),
            ScriptedReply::Empty => Ok(Completion {
                choices: vec![CompletionChoice::default()],
                ..Default::default()
            }),
            ScriptedReply::NoChoices => Ok(Completion::default()),
            ScriptedReply::Fail { status, message } => Err(AssistantError::Api { status, message }),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
