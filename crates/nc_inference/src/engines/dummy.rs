use async_trait::async_trait;
use nc_core::{Language, Result};

use super::{ChatMessage, GenerationEngine, Session};
use crate::prompts;
use crate::sections::{marker, SectionKind};

/// Offline engine producing a deterministic, marker-structured extractive
/// summary from the leading sentences. Used when no API key is configured,
/// and in tests.
pub struct DummyEngine;

impl DummyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn sentences(text: &str) -> Vec<String> {
    text.split_inclusive(&['.', '!', '?', '。', '！', '？'][..])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[async_trait]
impl GenerationEngine for DummyEngine {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate_summary(
        &self,
        text: &str,
        language: Language,
        session: &mut Session,
    ) -> Result<String> {
        session.push(ChatMessage::user(prompts::summary_prompt(language, text)));

        let sentences = sentences(text);
        let lead = sentences
            .first()
            .cloned()
            .unwrap_or_else(|| text.chars().take(120).collect());

        let mut out = String::new();
        out.push_str(marker(language, SectionKind::SectionSummaries));
        out.push('\n');
        out.push_str(&format!("1. {}\n\n", lead));

        out.push_str(marker(language, SectionKind::KeyPoints));
        out.push('\n');
        if sentences.is_empty() {
            out.push_str(&format!("- {}\n", lead));
        } else {
            for sentence in sentences.iter().take(3) {
                out.push_str(&format!("- {}\n", sentence));
            }
        }
        out.push('\n');

        out.push_str(marker(language, SectionKind::InDepthAnalysis));
        out.push('\n');
        let analysis: String = text.split_whitespace().take(60).collect::<Vec<_>>().join(" ");
        if analysis.is_empty() {
            out.push_str(&lead);
        } else {
            out.push_str(&analysis);
        }
        out.push('\n');

        session.push(ChatMessage::assistant(out.clone()));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;

    const SAMPLE: &str = "The port reopened on Monday. Shipping volumes recovered quickly. \
                          Officials expect normal traffic by Friday.";

    #[tokio::test]
    async fn test_output_carries_all_markers() {
        let engine = DummyEngine::new();
        let mut session = Session::new();
        let out = engine
            .generate_summary(SAMPLE, Language::En, &mut session)
            .await
            .unwrap();
        for kind in SectionKind::ALL {
            assert!(out.contains(marker(Language::En, kind)));
        }
    }

    #[tokio::test]
    async fn test_output_is_deterministic() {
        let engine = DummyEngine::new();
        let mut first_session = Session::new();
        let mut second_session = Session::new();
        let first = engine
            .generate_summary(SAMPLE, Language::En, &mut first_session)
            .await
            .unwrap();
        let second = engine
            .generate_summary(SAMPLE, Language::En, &mut second_session)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_session_gains_prompt_and_reply() {
        let engine = DummyEngine::new();
        let mut session = Session::new();
        engine
            .generate_summary(SAMPLE, Language::En, &mut session)
            .await
            .unwrap();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, "user");
        assert_eq!(session.messages()[1].role, "assistant");
    }

    #[tokio::test]
    async fn test_output_parses_into_complete_document() {
        let engine = DummyEngine::new();
        let mut session = Session::new();
        let out = engine
            .generate_summary(SAMPLE, Language::En, &mut session)
            .await
            .unwrap();
        let formatted = sections::parse_and_format(&out, Language::En);
        assert_eq!(formatted.matches("## ").count(), 3);
        assert!(!formatted.contains("_No "));
    }
}
