//! Configuration for the quote assistant.

use std::env;
use std::path::Path;
use tracing::info;

use crate::prompts::DEFAULT_SYSTEM_PROMPT;

/// Default system prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "QUOTE_PROMPT.md";

/// Configuration for [`QuoteAssistant`](crate::QuoteAssistant) and
/// [`QuoteConversations`](crate::QuoteConversations).
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// System prompt that opens every drawing analysis.
    pub system_prompt: String,

    /// Maximum number of turns kept per quote conversation. At least 1.
    pub max_history_turns: usize,

    /// Maximum number of quote conversations kept in memory. At least 1.
    pub max_conversations: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_history_turns: 20,
            max_conversations: 1000,
        }
    }
}

impl AssistantConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `QUOTE_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `QUOTE_PROMPT_FILE` - Path to system prompt file (default: QUOTE_PROMPT.md)
    /// - `QUOTE_MAX_HISTORY_TURNS` - Max turns per quote conversation (default: 20)
    /// - `QUOTE_MAX_CONVERSATIONS` - Max quote conversations in memory (default: 1000)
    ///
    /// A limit of `0` is raised to `1`.
    ///
    /// System prompt priority:
    /// 1. `QUOTE_SYSTEM_PROMPT` env var (if set)
    /// 2. Contents of prompt file (if exists)
    /// 3. Embedded default
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let system_prompt = if let Ok(prompt) = env::var("QUOTE_SYSTEM_PROMPT") {
            info!("Using system prompt from QUOTE_SYSTEM_PROMPT env var");
            prompt
        } else {
            let prompt_file =
                env::var("QUOTE_PROMPT_FILE").unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
            match load_prompt_file(&prompt_file) {
                Some(prompt) => {
                    info!("Loaded system prompt from {}", prompt_file);
                    prompt
                }
                None => defaults.system_prompt,
            }
        };

        let max_history_turns = env::var("QUOTE_MAX_HISTORY_TURNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_history_turns)
            .max(1);

        let max_conversations = env::var("QUOTE_MAX_CONVERSATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_conversations)
            .max(1);

        Self {
            system_prompt,
            max_history_turns,
            max_conversations,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> AssistantConfigBuilder {
        AssistantConfigBuilder::default()
    }
}

/// Builder for AssistantConfig.
#[derive(Debug, Default)]
pub struct AssistantConfigBuilder {
    config: AssistantConfig,
}

impl AssistantConfigBuilder {
    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    /// Set the max turns per quote conversation (at least 1).
    pub fn max_history_turns(mut self, turns: usize) -> Self {
        self.config.max_history_turns = turns.max(1);
        self
    }

    /// Set the max number of quote conversations (at least 1).
    pub fn max_conversations(mut self, conversations: usize) -> Self {
        self.config.max_conversations = conversations.max(1);
        self
    }

    /// Load the system prompt from a file, if it exists and is non-empty.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = prompt;
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AssistantConfig {
        self.config
    }
}

fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.max_history_turns, 20);
        assert_eq!(config.max_conversations, 1000);
    }

    #[test]
    fn test_builder_raises_zero_limits() {
        let config = AssistantConfig::builder()
            .max_history_turns(0)
            .max_conversations(0)
            .build();
        assert_eq!(config.max_history_turns, 1);
        assert_eq!(config.max_conversations, 1);
    }

    #[test]
    fn test_builder_prompt_file() {
        let dir = std::env::temp_dir().join(format!("quote-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("prompt.md");
        std::fs::write(&file, "  Especialista em usinagem.  \n").unwrap();
        let blank = dir.join("blank.md");
        std::fs::write(&blank, "   \n").unwrap();

        let config = AssistantConfig::builder().load_prompt_file(&file).build();
        assert_eq!(config.system_prompt, "Especialista em usinagem.");

        let config = AssistantConfig::builder().load_prompt_file(&blank).build();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);

        let config = AssistantConfig::builder()
            .load_prompt_file(dir.join("missing.md"))
            .build();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);

        let _ = std::fs::remove_dir_all(&dir);
    }

    // Env vars are process-global, so all scenarios run in one test.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_quote_vars() {
            std::env::remove_var("QUOTE_SYSTEM_PROMPT");
            std::env::remove_var("QUOTE_MAX_HISTORY_TURNS");
            std::env::remove_var("QUOTE_MAX_CONVERSATIONS");
            std::env::set_var("QUOTE_PROMPT_FILE", "/nonexistent/quote-prompt.md");
        }

        clear_all_quote_vars();
        let config = AssistantConfig::from_env();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.max_history_turns, 20);

        clear_all_quote_vars();
        std::env::set_var("QUOTE_SYSTEM_PROMPT", "Prompt de teste");
        std::env::set_var("QUOTE_MAX_HISTORY_TURNS", "4");
        std::env::set_var("QUOTE_MAX_CONVERSATIONS", "10");
        let config = AssistantConfig::from_env();
        assert_eq!(config.system_prompt, "Prompt de teste");
        assert_eq!(config.max_history_turns, 4);
        assert_eq!(config.max_conversations, 10);

        clear_all_quote_vars();
        std::env::set_var("QUOTE_MAX_HISTORY_TURNS", "0");
        std::env::set_var("QUOTE_MAX_CONVERSATIONS", "0");
        let config = AssistantConfig::from_env();
        assert_eq!(config.max_history_turns, 1);
        assert_eq!(config.max_conversations, 1);

        clear_all_quote_vars();
        std::env::remove_var("QUOTE_PROMPT_FILE");
    }
}
