use async_trait::async_trait;
use nc_core::{Language, Result};
use serde::{Deserialize, Serialize};

pub mod dummy;
pub mod llama;

pub use dummy::DummyEngine;
pub use llama::{LlamaEngine, ModelTarget, ProbeOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Conversation state for a sequence of generation calls. Owned by the
/// caller and passed into each call; engines never accumulate history of
/// their own.
#[derive(Debug, Clone, Default)]
pub struct Session {
    messages: Vec<ChatMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[async_trait]
pub trait GenerationEngine: Send + Sync {
    fn name(&self) -> &str;

    /// Generate free-form summary text for `text` in `language`. The
    /// prompt and the reply are appended to `session`.
    async fn generate_summary(
        &self,
        text: &str,
        language: Language,
        session: &mut Session,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_records_and_clears() {
        let mut session = Session::new();
        assert!(session.is_empty());

        session.push(ChatMessage::user("question"));
        session.push(ChatMessage::assistant("answer"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, "user");
        assert_eq!(session.messages()[1].role, "assistant");

        session.clear();
        assert!(session.is_empty());
    }
}
