use async_trait::async_trait;
use nc_core::{Error, Language, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ChatMessage, GenerationEngine, Session};
use crate::prompts;

/// One (endpoint, model) candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTarget {
    pub base_url: &'static str,
    pub model: &'static str,
}

/// Candidates probed in order at construction, newest models first, with
/// the v1 endpoints as the final fallbacks.
pub const API_TARGETS: &[ModelTarget] = &[
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3.3-70b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3.2-3b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3.2-1b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3.1-70b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3.1-8b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3-70b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com",
        model: "llama3-8b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com/v1",
        model: "llama3.2-3b",
    },
    ModelTarget {
        base_url: "https://api.llama-api.com/v1",
        model: "llama3-70b",
    },
];

/// Result of walking the candidate list.
#[derive(Debug)]
pub enum ProbeOutcome {
    Success(ModelTarget),
    Unauthorized,
    AllFailed(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [&'a str]>,
}

/// Accepted response shapes: an object with a choices array, a bare list
/// of choices, or a bare list of content items. Anything else is an
/// unrecognized-shape error, not probed further.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationReply {
    Choices { choices: Vec<ReplyChoice> },
    ChoiceList(Vec<ReplyChoice>),
    ContentList(Vec<ReplyContent>),
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    content: String,
}

impl GenerationReply {
    fn into_content(self) -> Result<String> {
        let content = match self {
            GenerationReply::Choices { choices } => {
                choices.into_iter().next().map(|c| c.message.content)
            }
            GenerationReply::ChoiceList(choices) => {
                choices.into_iter().next().map(|c| c.message.content)
            }
            GenerationReply::ContentList(items) => items.into_iter().next().map(|c| c.content),
        };
        content.ok_or_else(|| Error::Generation("response contained no choices".to_string()))
    }
}

/// OpenAI-compatible chat client for the Llama API.
pub struct LlamaEngine {
    client: Client,
    api_key: String,
    target: ModelTarget,
}

impl LlamaEngine {
    /// Probe the candidate list and connect to the first target that
    /// answers. A 401 means the key itself is bad and stops the probe.
    pub async fn connect(api_key: &str) -> Result<Self> {
        if !api_key.starts_with("LA-") {
            return Err(Error::Generation(
                "invalid API key format, expected an LA- prefix".to_string(),
            ));
        }

        let client = Client::new();
        match probe_targets(&client, api_key).await {
            ProbeOutcome::Success(target) => {
                info!("✅ Connected to {} ({})", target.base_url, target.model);
                Ok(Self {
                    client,
                    api_key: api_key.to_string(),
                    target,
                })
            }
            ProbeOutcome::Unauthorized => Err(Error::Generation(
                "API key rejected (401), not trying further targets".to_string(),
            )),
            ProbeOutcome::AllFailed(last) => Err(Error::Generation(format!(
                "no usable generation target: {}",
                last
            ))),
        }
    }

    pub fn target(&self) -> ModelTarget {
        self.target
    }
}

/// One lightweight chat call per candidate, in order. First success wins;
/// a 401 aborts the whole walk.
pub async fn probe_targets(client: &Client, api_key: &str) -> ProbeOutcome {
    let mut last_error = String::from("no targets configured");
    for target in API_TARGETS {
        debug!("probing {} with model {}", target.base_url, target.model);
        let probe = [ChatMessage::user("test")];
        let request = ChatRequest {
            model: target.model,
            messages: &probe,
            temperature: None,
            max_tokens: 1,
            stop: None,
        };

        let response = client
            .post(format!("{}/chat/completions", target.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                return ProbeOutcome::Unauthorized;
            }
            Ok(response) if response.status().is_success() => {
                return ProbeOutcome::Success(*target);
            }
            Ok(response) => {
                last_error = format!("{} returned {}", target.base_url, response.status());
            }
            Err(e) => {
                last_error = e.to_string();
            }
        }
    }
    ProbeOutcome::AllFailed(last_error)
}

#[async_trait]
impl GenerationEngine for LlamaEngine {
    fn name(&self) -> &str {
        "Llama"
    }

    async fn generate_summary(
        &self,
        text: &str,
        language: Language,
        session: &mut Session,
    ) -> Result<String> {
        session.push(ChatMessage::user(prompts::summary_prompt(language, text)));

        let stop = ["[END]", "\n\n\n"];
        let request = ChatRequest {
            model: self.target.model,
            messages: session.messages(),
            temperature: Some(0.7),
            max_tokens: 2048,
            stop: Some(&stop),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.target.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<serde_json::Value>().await?;
        let reply: GenerationReply = serde_json::from_value(body.clone())
            .map_err(|_| Error::Generation(format!("unrecognized response shape: {}", body)))?;
        let content = reply.into_content()?.trim().to_string();

        session.push(ChatMessage::assistant(content.clone()));
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_list_is_ordered_newest_first() {
        assert!(!API_TARGETS.is_empty());
        assert_eq!(API_TARGETS[0].model, "llama3.3-70b");
        assert!(API_TARGETS.last().unwrap().base_url.ends_with("/v1"));
    }

    #[test]
    fn test_reply_decodes_object_with_choices() {
        let value = json!({"choices": [{"message": {"content": "hello"}}]});
        let reply: GenerationReply = serde_json::from_value(value).unwrap();
        assert_eq!(reply.into_content().unwrap(), "hello");
    }

    #[test]
    fn test_reply_decodes_list_of_choices() {
        let value = json!([{"message": {"content": "hello"}}]);
        let reply: GenerationReply = serde_json::from_value(value).unwrap();
        assert_eq!(reply.into_content().unwrap(), "hello");
    }

    #[test]
    fn test_reply_decodes_list_of_content() {
        let value = json!([{"content": "hello"}]);
        let reply: GenerationReply = serde_json::from_value(value).unwrap();
        assert_eq!(reply.into_content().unwrap(), "hello");
    }

    #[test]
    fn test_reply_rejects_unrecognized_shapes() {
        assert!(serde_json::from_value::<GenerationReply>(json!({"data": 1})).is_err());
        assert!(serde_json::from_value::<GenerationReply>(json!(42)).is_err());
        assert!(serde_json::from_value::<GenerationReply>(json!("text")).is_err());
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let value = json!({"choices": []});
        let reply: GenerationReply = serde_json::from_value(value).unwrap();
        assert!(reply.into_content().is_err());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_key() {
        let result = LlamaEngine::connect("sk-wrong-prefix").await;
        assert!(result.is_err());
    }
}
