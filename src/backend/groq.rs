use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::TranslationBackend;
use crate::config::{GroqConfig, TranslationSettings};
use crate::error::BackendError;

const GROQ_CONFIDENCE: f32 = 0.95;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Hosted Groq API, spoken through its OpenAI-compatible chat endpoint.
pub struct GroqBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    health_timeout: Duration,
}

impl GroqBackend {
    pub fn new(
        config: &GroqConfig,
        generation_timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self, BackendError> {
        if config.api_key.trim().is_empty() {
            return Err(BackendError::NotConfigured);
        }

        let client = Client::builder().timeout(generation_timeout).build()?;

        info!(
            "Initialized GroqBackend: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout,
        })
    }

    async fn chat(
        &self,
        request: &ChatCompletionRequest<'_>,
        timeout: Option<Duration>,
    ) -> Result<String, BackendError> {
        let url = format!("{}/chat/completions", self.base_url);
        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| BackendError::Decode("response has no choices".to_string()))
    }
}

#[async_trait]
impl TranslationBackend for GroqBackend {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn confidence(&self) -> f32 {
        GROQ_CONFIDENCE
    }

    async fn probe(&self) -> Result<(), BackendError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: "Hello",
            }],
            max_tokens: 10,
            temperature: 0.1,
            top_p: None,
        };
        self.chat(&request, Some(self.health_timeout)).await?;
        Ok(())
    }

    async fn complete(
        &self,
        prompt: &str,
        settings: &TranslationSettings,
    ) -> Result<String, BackendError> {
        debug!("Groq completion request ({} prompt chars)", prompt.len());
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            top_p: Some(settings.top_p),
        };
        self.chat(&request, None).await
    }
}
