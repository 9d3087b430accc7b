use std::sync::Arc;

use nc_core::Language;
use tracing::warn;

use crate::engines::{GenerationEngine, Session};
use crate::sections;

/// Facade over a generation engine. Whatever the engine returns, including
/// its own error text, is parsed into the canonical three-section document,
/// so callers always receive a complete summary and never a raw error.
pub struct Summarizer {
    engine: Arc<dyn GenerationEngine>,
}

impl Summarizer {
    pub fn new(engine: Arc<dyn GenerationEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub async fn summarize(&self, text: &str, language: Language, session: &mut Session) -> String {
        let raw = match self.engine.generate_summary(text, language, session).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("generation engine failed, rendering placeholders: {}", e);
                e.to_string()
            }
        };
        sections::parse_and_format(&raw, language)
    }
}
