use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::TranslationBackend;
use crate::config::{OllamaConfig, TranslationSettings};
use crate::error::BackendError;

const OLLAMA_CONFIDENCE: f32 = 0.85;

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    #[serde(default)]
    name: String,
}

/// Locally running Ollama server.
pub struct OllamaBackend {
    client: Client,
    model: String,
    base_url: String,
    health_timeout: Duration,
}

impl OllamaBackend {
    pub fn new(
        config: &OllamaConfig,
        generation_timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(generation_timeout).build()?;

        info!(
            "Initialized OllamaBackend: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout,
        })
    }

    /// Names of the models installed on the server.
    pub async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

/// `installed` satisfies `wanted` when the names are equal or their base
/// names (before the `:tag` suffix) are.
pub fn model_matches(installed: &str, wanted: &str) -> bool {
    if installed == wanted {
        return true;
    }
    let base = |name: &str| name.split(':').next().unwrap_or(name).to_string();
    !wanted.is_empty() && base(installed) == base(wanted)
}

#[async_trait]
impl TranslationBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn confidence(&self) -> f32 {
        OLLAMA_CONFIDENCE
    }

    async fn probe(&self) -> Result<(), BackendError> {
        let models = self.list_models().await?;
        debug!("Ollama reports {} installed models", models.len());

        if models.iter().any(|name| model_matches(name, &self.model)) {
            Ok(())
        } else {
            Err(BackendError::ModelNotInstalled(self.model.clone()))
        }
    }

    async fn complete(
        &self,
        prompt: &str,
        settings: &TranslationSettings,
    ) -> Result<String, BackendError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: settings.temperature,
                top_p: settings.top_p,
                max_tokens: settings.max_tokens,
            },
        };

        let start = std::time::Instant::now();
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        debug!("Ollama generation took {}ms", start.elapsed().as_millis());
        Ok(result.response)
    }
}
