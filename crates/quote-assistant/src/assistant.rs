//! QuoteAssistant: completion calls, drawing analysis, email classification
//! and file upload.

use std::path::Path;
use std::sync::Arc;

use openai_client::OpenAiClient;
use quote_core::{
    hash_messages, hash_prompt, AssistantError, CompletionClient, FilePurpose, FileStore, Message,
};
use tracing::{debug, info, warn};

use crate::analysis::DrawingAnalysis;
use crate::config::AssistantConfig;
use crate::prompts;

/// Text returned by [`QuoteAssistant::send_message`] when the model gave
/// no content.
pub const NO_RESPONSE: &str = "Error: no response";

/// Service wrapper around a completion client and a file store.
///
/// Every operation builds its own message list; the clients are the only
/// state shared between calls.
pub struct QuoteAssistant<C, F> {
    client: C,
    files: F,
    config: AssistantConfig,
    system_prompt_hash: String,
}

impl QuoteAssistant<Arc<OpenAiClient>, Arc<OpenAiClient>> {
    /// Create an assistant backed by OpenAI, configured from the environment.
    ///
    /// See [`OpenAiConfig::from_env`](openai_client::OpenAiConfig::from_env) and
    /// [`AssistantConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, AssistantError> {
        let client = Arc::new(OpenAiClient::from_env()?);
        Ok(Self::new(client.clone(), client, AssistantConfig::from_env()))
    }
}

impl<C, F> QuoteAssistant<C, F>
where
    C: CompletionClient,
    F: FileStore,
{
    /// Create a new assistant from explicit collaborators.
    pub fn new(client: C, files: F, config: AssistantConfig) -> Self {
        let system_prompt_hash = hash_prompt(&config.system_prompt);
        info!(
            "QuoteAssistant initialized with model: {}, system prompt fingerprint: {}",
            client.model(),
            system_prompt_hash
        );

        Self {
            client,
            files,
            config,
            system_prompt_hash,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Fingerprint of the configured system prompt.
    pub fn system_prompt_hash(&self) -> &str {
        &self.system_prompt_hash
    }

    /// The completion client in use.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Send `messages` and return the first choice's text.
    ///
    /// Fails with [`AssistantError::EmptyResponse`] when the provider sent no
    /// choices, or a null or empty first choice.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, AssistantError> {
        info!(
            "Sending {} messages to {}",
            messages.len(),
            self.client.model()
        );
        debug!("Request fingerprint: {}", hash_messages(messages));

        let completion = self.client.create_completion(messages).await?;

        match completion.first_content() {
            Some(text) if !text.is_empty() => {
                info!("Received {} chars", text.chars().count());
                Ok(text.to_string())
            }
            _ => Err(AssistantError::EmptyResponse),
        }
    }

    /// Send `messages` and return the first choice's text, or
    /// [`NO_RESPONSE`] when the model gave none.
    ///
    /// Provider errors still propagate. Use [`complete`](Self::complete) to
    /// tell an empty reply apart from real output.
    pub async fn send_message(&self, messages: &[Message]) -> Result<String, AssistantError> {
        match self.complete(messages).await {
            Err(AssistantError::EmptyResponse) => {
                warn!("No content in response, using fallback");
                Ok(NO_RESPONSE.to_string())
            }
            other => other,
        }
    }

    /// Analyse the technical drawing stored as `file_id` in four chained
    /// steps: dimensions, processes, time for `quantity` parts, JSON summary.
    ///
    /// Each step sees every earlier question and answer. The first failing
    /// step aborts the analysis.
    pub async fn analyze_drawing(
        &self,
        file_id: &str,
        quantity: u32,
    ) -> Result<DrawingAnalysis, AssistantError> {
        info!(
            "Starting drawing analysis for file: {} | quantity: {}",
            file_id, quantity
        );

        let mut messages = vec![Message::system(self.config.system_prompt.clone())];

        let dimensions = self
            .ask(&mut messages, prompts::dimensions_prompt(file_id))
            .await?;
        let processes = self
            .ask(&mut messages, prompts::processes_prompt(file_id))
            .await?;
        let time_estimate = self
            .ask(&mut messages, prompts::time_prompt(file_id, quantity))
            .await?;
        let summary = self
            .ask(
                &mut messages,
                prompts::summary_prompt(file_id, &dimensions, &processes, &time_estimate),
            )
            .await?;

        info!("Final JSON generated: {}", summary);

        Ok(DrawingAnalysis {
            file_id: file_id.to_string(),
            quantity,
            dimensions,
            processes,
            time_estimate,
            summary,
            transcript: messages,
        })
    }

    /// Ask the model whether an email is a production quote request.
    ///
    /// Subject and body are embedded verbatim into a single user turn. The
    /// reply is returned exactly as received; see
    /// [`EmailClassification::parse`](crate::EmailClassification::parse).
    pub async fn classify_email(&self, subject: &str, body: &str) -> Result<String, AssistantError> {
        info!("Classifying email - subject: {}", subject);

        let messages = [Message::user(prompts::classify_email_prompt(subject, body))];
        let reply = self.send_message(&messages).await?;

        info!("Classification reply: {}", reply);
        Ok(reply)
    }

    /// Upload a local file for later reference by id and return that id.
    ///
    /// Every call creates a new stored object.
    pub async fn file_upload(&self, path: impl AsRef<Path>) -> Result<String, AssistantError> {
        let path = path.as_ref();
        info!("Uploading file: {}", path.display());

        let stored = self.files.upload_file(path, FilePurpose::UserData).await?;

        info!("Upload finished. File ID: {}", stored.id);
        Ok(stored.id)
    }

    async fn ask(
        &self,
        messages: &mut Vec<Message>,
        prompt: String,
    ) -> Result<String, AssistantError> {
        messages.push(Message::user(prompt));
        let reply = self.send_message(messages).await?;
        messages.push(Message::assistant(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_llm::{MemoryFileStore, ScriptedClient, ScriptedReply};
    use quote_core::Role;

    fn assistant(replies: Vec<ScriptedReply>) -> QuoteAssistant<ScriptedClient, MemoryFileStore> {
        QuoteAssistant::new(
            ScriptedClient::new(replies),
            MemoryFileStore::new(),
            AssistantConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_send_message_returns_first_choice() {
        let assistant = assistant(vec!["Barra redonda 40mm".into()]);
        let reply = assistant
            .send_message(&[Message::user("Medidas?")])
            .await
            .unwrap();
        assert_eq!(reply, "Barra redonda 40mm");
    }

    #[tokio::test]
    async fn test_send_message_sentinel_on_missing_content() {
        let assistant = assistant(vec![
            ScriptedReply::Empty,
            ScriptedReply::NoChoices,
            "".into(),
        ]);

        for _ in 0..3 {
            let reply = assistant.send_message(&[Message::user("?")]).await.unwrap();
            assert_eq!(reply, NO_RESPONSE);
        }
    }

    #[tokio::test]
    async fn test_complete_reports_empty_response() {
        let assistant = assistant(vec![ScriptedReply::Empty]);
        let err = assistant.complete(&[Message::user("?")]).await.unwrap_err();
        assert!(matches!(err, AssistantError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_send_message_propagates_provider_error() {
        let assistant = assistant(vec![ScriptedReply::Fail {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        }]);
        let err = assistant.send_message(&[Message::user("?")]).await.unwrap_err();
        assert!(matches!(err, AssistantError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_analysis_history_grows_by_one_turn_per_step() {
        let assistant = assistant(vec!["d".into(), "p".into(), "t".into(), "{}".into()]);
        let analysis = assistant.analyze_drawing("F1", 10).await.unwrap();

        let requests = assistant.client().requests().await;
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].len(), 2);
        for i in 1..4 {
            // previous request + its reply + one new user turn
            assert_eq!(requests[i].len(), requests[i - 1].len() + 2);
            assert_eq!(requests[i][..requests[i - 1].len()], requests[i - 1][..]);
            assert_eq!(requests[i][requests[i].len() - 2].role, Role::Assistant);
        }

        assert_eq!(requests[0][0], Message::system(prompts::DEFAULT_SYSTEM_PROMPT));
        assert_eq!(analysis.transcript.len(), 9);
        assert_eq!(analysis.transcript[8], Message::assistant("{}"));
    }

    #[tokio::test]
    async fn test_analysis_stops_at_first_failure() {
        let assistant = assistant(vec![
            "d".into(),
            ScriptedReply::Fail {
                status: 500,
                message: "boom".to_string(),
            },
            "t".into(),
            "{}".into(),
        ]);

        let err = assistant.analyze_drawing("F1", 1).await.unwrap_err();
        assert!(matches!(err, AssistantError::Api { status: 500, .. }));
        assert_eq!(assistant.client().requests().await.len(), 2);
        assert_eq!(assistant.client().remaining().await, 2);
    }

    #[tokio::test]
    async fn test_analysis_with_custom_system_prompt() {
        let config = AssistantConfig::builder()
            .system_prompt("Especialista em caldeiraria.")
            .build();
        let assistant = QuoteAssistant::new(
            ScriptedClient::new(["a", "b", "c", "d"]),
            MemoryFileStore::new(),
            config,
        );

        assistant.analyze_drawing("F9", 3).await.unwrap();
        let requests = assistant.client().requests().await;
        assert_eq!(requests[0][0].content, "Especialista em caldeiraria.");
        assert_eq!(
            assistant.system_prompt_hash(),
            hash_prompt("Especialista em caldeiraria.")
        );
    }

    #[tokio::test]
    async fn test_file_upload_returns_store_id() {
        let dir = std::env::temp_dir().join(format!("quote-upload-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("flange.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let assistant = assistant(vec![]);
        assert_eq!(assistant.file_upload(&path).await.unwrap(), "file-mock-1");
        assert_eq!(assistant.file_upload(&path).await.unwrap(), "file-mock-2");

        let err = assistant.file_upload(dir.join("missing.pdf")).await.unwrap_err();
        assert!(matches!(err, AssistantError::Io(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
