//! Chat conversations attached to quotes.
//!
//! Each quote gets its own running chat with the model. Conversations live
//! in memory only; nothing here writes to a database.

use async_trait::async_trait;
use quote_core::{
    AssistantError, CompletionClient, ConversationHistory, Message, QuoteId, Role,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::AssistantConfig;

/// Lookup of quotes a conversation may be opened for.
#[async_trait]
pub trait QuoteDirectory: Send + Sync {
    /// Whether `quote` exists.
    async fn quote_exists(&self, quote: QuoteId) -> Result<bool, AssistantError>;
}

/// Directory that accepts every quote id.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyQuote;

#[async_trait]
impl QuoteDirectory for AnyQuote {
    async fn quote_exists(&self, _quote: QuoteId) -> Result<bool, AssistantError> {
        Ok(true)
    }
}

/// A fixed set of known quote ids.
#[async_trait]
impl QuoteDirectory for Vec<QuoteId> {
    async fn quote_exists(&self, quote: QuoteId) -> Result<bool, AssistantError> {
        Ok(self.contains(&quote))
    }
}

/// Number of locks exchanges on different quotes are spread over.
const EXCHANGE_LOCKS: usize = 16;

/// Per-quote conversations with the model.
///
/// Exchanges on the same quote run one at a time, so every request carries
/// the replies to earlier messages and replies are recorded in order.
pub struct QuoteConversations<C, D = AnyQuote> {
    client: C,
    quotes: D,
    history: ConversationHistory,
    exchanges: [Mutex<()>; EXCHANGE_LOCKS],
}

impl<C, D> QuoteConversations<C, D>
where
    C: CompletionClient,
    D: QuoteDirectory,
{
    /// Create a conversation store with explicit collaborators.
    pub fn new(client: C, quotes: D, config: &AssistantConfig) -> Self {
        Self {
            client,
            quotes,
            history: ConversationHistory::with_limits(
                config.max_history_turns,
                config.max_conversations,
            ),
            exchanges: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Messages recorded for a quote, oldest first. Empty if none.
    pub async fn messages_for_quote(&self, quote: QuoteId) -> Vec<Message> {
        self.history.get(quote).await
    }

    /// Record a message on a quote's conversation, send the whole
    /// conversation to the model and record its reply.
    ///
    /// The caller's message stays recorded even if the model call fails.
    pub async fn add_message(
        &self,
        quote: QuoteId,
        role: Role,
        content: impl Into<String>,
    ) -> Result<Message, AssistantError> {
        let _exchange = self.exchanges[(quote % EXCHANGE_LOCKS as u64) as usize]
            .lock()
            .await;

        if !self.history.contains(quote).await && !self.quotes.quote_exists(quote).await? {
            return Err(AssistantError::UnknownQuote(quote));
        }

        self.history.push(quote, Message::new(role, content)).await;

        let messages = self.history.get(quote).await;
        debug!("Quote {}: sending {} messages", quote, messages.len());

        let completion = self.client.create_completion(&messages).await?;
        let reply = completion
            .first_content()
            .filter(|text| !text.is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        let assistant = Message::assistant(reply);
        self.history.push(quote, assistant.clone()).await;

        info!("Quote {}: recorded assistant reply", quote);
        Ok(assistant)
    }

    /// Drop a quote's conversation.
    pub async fn clear(&self, quote: QuoteId) {
        self.history.clear(quote).await;
    }
}
