use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::{info, warn};

use super::groq::GroqBackend;
use super::interface::TranslationBackend;
use super::ollama::OllamaBackend;
use crate::config::{BackendConfig, BackendKind};

/// Factory for creating translation backends
pub struct BackendFactory;

impl BackendFactory {
    /// Create the backend selected by `backend_config.backend`.
    pub fn create_backend(backend_config: &BackendConfig) -> Result<Arc<dyn TranslationBackend>> {
        info!("Initializing translation backend: {}", backend_config.backend.as_str());

        let generation_timeout = Duration::from_secs(backend_config.generation_timeout_secs);
        let health_timeout = Duration::from_secs(backend_config.health_timeout_secs);

        let backend: Arc<dyn TranslationBackend> = match backend_config.backend {
            BackendKind::Groq => Arc::new(GroqBackend::new(
                &backend_config.groq,
                generation_timeout,
                health_timeout,
            )?),
            BackendKind::Ollama => Arc::new(OllamaBackend::new(
                &backend_config.ollama,
                generation_timeout,
                health_timeout,
            )?),
        };
        Ok(backend)
    }

    /// Like `create_backend`, but a failure leaves the service without a
    /// backend instead of aborting startup.
    pub fn create_optional(backend_config: &BackendConfig) -> Option<Arc<dyn TranslationBackend>> {
        match Self::create_backend(backend_config) {
            Ok(backend) => Some(backend),
            Err(e) => {
                warn!(
                    "Failed to initialize {} backend, translation will be unavailable: {}",
                    backend_config.backend.as_str(),
                    e
                );
                None
            }
        }
    }
}
