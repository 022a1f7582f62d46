use async_trait::async_trait;
use np_core::{Config, Error, PostDraft, PromptArticle, Result, UpstreamFailure};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{ensure_articles, InferenceModel};
use crate::prompt::{self, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: String,
}

/// Chat-completion model served by OpenRouter (or any OpenAI-compatible
/// endpoint at `base_url`).
pub struct OpenRouterModel {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    referer: String,
}

impl OpenRouterModel {
    pub fn from_config(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.llm_api_key.clone(),
            base_url: config.llm_api_url.trim_end_matches('/').to_string(),
            model: config.llm_model.clone(),
            referer: config.http_referer.clone(),
        }
    }

    fn request(&self, articles: &[PromptArticle]) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::user_prompt(articles),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

impl fmt::Debug for OpenRouterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl InferenceModel for OpenRouterModel {
    fn name(&self) -> &str {
        "OpenRouter"
    }

    async fn draft_post(&self, articles: &[PromptArticle]) -> Result<PostDraft> {
        ensure_articles(articles)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Configuration("OpenRouter API key missing".to_string()))?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", "LinkedIn Post Generator")
            .json(&self.request(articles))
            .send()
            .await
            .map_err(|e| Error::AiService(UpstreamFailure::new(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
            return Err(Error::AiService(UpstreamFailure::with_payload(
                format!("{} returned {}", self.name(), status),
                payload,
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| Error::AiService(UpstreamFailure::new(e.to_string())))?;

        let choice = serde_json::from_value::<ChatResponse>(body.clone())
            .ok()
            .and_then(|completion| completion.choices.into_iter().next())
            .ok_or_else(|| {
                Error::AiService(UpstreamFailure::with_payload("No choices in completion", body))
            })?;

        tracing::debug!("🧠 {} drafted {} chars", self.model, choice.message.content.len());
        Ok(PostDraft::new(&choice.message.content))
    }
}
