use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use super::fallback::fallback;
use super::prompt::{build_prompt, clean_response};
use super::types::{
    BackendStatus, DetectionResponse, HealthResponse, TranslationRequest, TranslationResponse,
};
use crate::backend::TranslationBackend;
use crate::config::TranslationSettings;
use crate::error::{ApiError, BackendError};
use crate::language;

/// Composes detection, health checks, the backend and the fallback table
/// into the request flows behind the HTTP routes.
///
/// Holds no per-request state; the backend is optional so a failed startup
/// initialisation leaves the service running but always unavailable.
pub struct TranslationService {
    backend: Option<Arc<dyn TranslationBackend>>,
    backend_name: String,
    settings: TranslationSettings,
    request_timeout: Duration,
    serve_fallback_when_unavailable: bool,
}

impl TranslationService {
    pub fn new(
        backend: Option<Arc<dyn TranslationBackend>>,
        backend_name: impl Into<String>,
        settings: TranslationSettings,
        request_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            backend_name: backend_name.into(),
            settings,
            request_timeout,
            serve_fallback_when_unavailable: false,
        }
    }

    /// Answer `/translate` from the phrase table instead of with a 503 when
    /// the health probe fails.
    pub fn with_fallback_when_unavailable(mut self, enabled: bool) -> Self {
        self.serve_fallback_when_unavailable = enabled;
        self
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Probe the backend. Always re-checks; nothing is cached between calls.
    pub async fn is_available(&self) -> bool {
        match &self.backend {
            Some(backend) => backend.is_available().await,
            None => false,
        }
    }

    /// Body of `/health`.
    pub async fn health(&self) -> HealthResponse {
        let message = self.status_line().await;
        HealthResponse {
            status: "healthy".to_string(),
            message,
        }
    }

    /// Body of `/`: the health message plus a usage hint.
    pub async fn root(&self) -> HealthResponse {
        let message = format!(
            "{}. Use /translate endpoint to translate text.",
            self.status_line().await
        );
        HealthResponse {
            status: "healthy".to_string(),
            message,
        }
    }

    async fn status_line(&self) -> String {
        let backend_status = if self.is_available().await {
            "running"
        } else {
            "not available"
        };
        format!(
            "Translation API is running. {} status: {}",
            self.backend_name, backend_status
        )
    }

    pub async fn backend_status(&self) -> BackendStatus {
        let Some(backend) = &self.backend else {
            return BackendStatus {
                available: false,
                model: String::new(),
                status: "error".to_string(),
                base_url: None,
                error: Some(BackendError::NotConfigured.to_string()),
            };
        };

        let (available, status, error) = match backend.probe().await {
            Ok(()) => (true, "running", None),
            Err(e) => {
                warn!("{} status check failed: {}", backend.name(), e);
                (false, "not available", Some(e.to_string()))
            }
        };

        BackendStatus {
            available,
            model: backend.model().to_string(),
            status: status.to_string(),
            base_url: Some(backend.base_url().to_string()),
            error,
        }
    }

    pub fn detect(&self, text: &str) -> DetectionResponse {
        DetectionResponse {
            text: text.to_string(),
            detected_language: language::detect(text),
        }
    }

    /// The `/translate` flow, bounded by the request timeout.
    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, ApiError> {
        if request.text.trim().is_empty() {
            return Err(ApiError::InvalidRequest("text must not be empty".to_string()));
        }

        let span = tracing::info_span!("translate", request_id = %Uuid::new_v4());
        match tokio::time::timeout(self.request_timeout, self.run_translate(request))
            .instrument(span)
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ApiError::Internal(format!(
                "translation did not finish within {}s",
                self.request_timeout.as_secs()
            ))),
        }
    }

    async fn run_translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, ApiError> {
        let available = self.is_available().await;
        if !available && !self.serve_fallback_when_unavailable {
            return Err(ApiError::BackendUnavailable(format!(
                "{} service not available. \
                 Please ensure the translation backend is reachable and configured.",
                self.backend_name
            )));
        }

        // A declared source language counts as the detected one too
        let (detected_language, source_language) = match request.source_language.as_deref() {
            Some(source) if !source.is_empty() => (source.to_string(), source.to_string()),
            _ => {
                let detected = language::detect(&request.text);
                (detected.clone(), detected)
            }
        };

        // Same-language requests never reach the backend, so they are answered
        // even when it is down and the fallback table is in use
        if source_language.to_lowercase() == request.target_language.to_lowercase() {
            debug!("Source and target are both {}, skipping backend", source_language);
            return Ok(TranslationResponse {
                original_text: request.text.clone(),
                translated_text: request.text,
                detected_language,
                source_language,
                target_language: request.target_language,
                confidence: Some(1.0),
                fallback_used: false,
                message: "Source and target languages are the same".to_string(),
            });
        }

        if !available {
            warn!("{} unavailable, answering from fallback table", self.backend_name);
            return Ok(fallback(&request.text, &detected_language, &request.target_language));
        }

        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                return Err(ApiError::Internal(
                    "backend vanished after health check".to_string(),
                ))
            }
        };

        match self
            .translate_text(
                backend.as_ref(),
                &request.text,
                &source_language,
                &request.target_language,
            )
            .await
        {
            Ok(translated_text) => {
                info!(
                    "Translated {} chars {} -> {} with {}",
                    request.text.len(),
                    source_language,
                    request.target_language,
                    backend.name()
                );
                Ok(TranslationResponse {
                    original_text: request.text,
                    translated_text,
                    detected_language,
                    source_language,
                    target_language: request.target_language,
                    confidence: Some(backend.confidence()),
                    fallback_used: false,
                    message: format!(
                        "Translation completed successfully using {} ({})",
                        backend.name(),
                        backend.model()
                    ),
                })
            }
            Err(e) => {
                warn!("Translation error, using fallback: {}", e);
                Ok(fallback(&request.text, &detected_language, &request.target_language))
            }
        }
    }

    /// Prompt the backend and post-process its reply.
    async fn translate_text(
        &self,
        backend: &dyn TranslationBackend,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        let prompt = build_prompt(text, source_lang, target_lang);
        debug!("Translation prompt: {}", prompt);

        let raw = backend.complete(&prompt, &self.settings).await?;
        clean_response(&raw).ok_or(BackendError::EmptyResponse)
    }
}
