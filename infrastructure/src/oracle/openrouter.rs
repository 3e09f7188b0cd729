//! OpenRouter oracle adapter.
//!
//! Speaks the OpenAI-compatible chat-completions protocol. A missing
//! API key makes the adapter permanently unavailable rather than an
//! error at construction: the engine degrades to local heuristics.

use async_trait::async_trait;
use gavel_application::{Oracle, OracleError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OracleConfig;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub struct OpenRouterOracle {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenRouterOracle {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        )
    }
}

#[async_trait]
impl Oracle for OpenRouterOracle {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let Some(key) = &self.api_key else {
            return Err(OracleError::Unavailable);
        };
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        debug!(model = %self.model, prompt_chars = prompt.len(), "oracle request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await
            .map_err(|err| OracleError::RequestFailed(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::RequestFailed(format!("HTTP {status}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| OracleError::Unparseable(err.to_string()))?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| OracleError::Unparseable("reply carried no choices".to_string()))
    }
}
