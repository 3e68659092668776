//! Per-quote conversation history.
//!
//! Chats are kept in memory only, keyed by the external quote identifier,
//! with turn-based trimming and LRU eviction so a long-running service does
//! not grow without bound.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::message::{Message, Role};

/// External identifier of a quote a conversation belongs to.
pub type QuoteId = u64;

/// Default maximum number of quotes to track before LRU eviction.
const DEFAULT_MAX_QUOTES: usize = 1000;

/// Per-quote conversation history with LRU eviction.
///
/// # Example
///
/// ```rust
/// use quote_core::{ConversationHistory, Message};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let history = ConversationHistory::new(5); // Keep 5 turns
///
///     history.push(42, Message::user("Qual o material?")).await;
///     history.push(42, Message::assistant("Aço 1045")).await;
///
///     let messages = history.get(42).await;
///     assert_eq!(messages.len(), 2);
/// }
/// ```
#[derive(Debug)]
pub struct ConversationHistory {
    /// Insertion order doubles as recency order for eviction.
    histories: RwLock<IndexMap<QuoteId, Vec<Message>>>,
    /// Maximum number of turns (user + assistant pairs) to keep per quote.
    max_turns: usize,
    max_quotes: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(20)
    }
}

impl ConversationHistory {
    /// Create a new conversation history with the given max turns.
    pub fn new(max_turns: usize) -> Self {
        Self::with_limits(max_turns, DEFAULT_MAX_QUOTES)
    }

    /// Create a new conversation history with custom limits.
    ///
    /// # Arguments
    ///
    /// * `max_turns` - Maximum number of turns (user + assistant pairs) per quote
    /// * `max_quotes` - Maximum number of quotes to track before LRU eviction
    ///
    /// Both limits are raised to at least 1.
    pub fn with_limits(max_turns: usize, max_quotes: usize) -> Self {
        Self {
            histories: RwLock::new(IndexMap::new()),
            max_turns: max_turns.max(1),
            max_quotes: max_quotes.max(1),
        }
    }

    /// Get the conversation for a quote, oldest turn first.
    ///
    /// This marks the quote as recently used.
    pub async fn get(&self, quote: QuoteId) -> Vec<Message> {
        let mut histories = self.histories.write().await;

        match histories.shift_remove(&quote) {
            Some(entry) => {
                let result = entry.clone();
                histories.insert(quote, entry);
                result
            }
            None => Vec::new(),
        }
    }

    /// Append a single message to a quote's conversation.
    ///
    /// Trimming keeps the newest message and never leaves the conversation
    /// starting on an assistant turn.
    pub async fn push(&self, quote: QuoteId, message: Message) {
        let mut histories = self.histories.write().await;

        let mut history = histories.shift_remove(&quote).unwrap_or_default();
        history.push(message);

        let max_messages = self.max_turns * 2;
        if history.len() > max_messages {
            let mut to_remove = history.len() - max_messages;
            while to_remove < history.len() - 1 && history[to_remove].role == Role::Assistant {
                to_remove += 1;
            }
            history.drain(0..to_remove);
        }

        histories.insert(quote, history);

        while histories.len() > self.max_quotes {
            histories.shift_remove_index(0);
        }
    }

    /// Whether a conversation exists for this quote.
    pub async fn contains(&self, quote: QuoteId) -> bool {
        self.histories.read().await.contains_key(&quote)
    }

    /// Clear history for a specific quote.
    pub async fn clear(&self, quote: QuoteId) {
        self.histories.write().await.shift_remove(&quote);
    }
}
