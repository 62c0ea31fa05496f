use std::sync::Arc;
use std::time::Duration;

use crate::backend::{BackendFactory, TranslationBackend};
use crate::config::Config;
use crate::translate::TranslationService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translation_service: Arc<TranslationService>,
}

impl AppState {
    /// Build state from configuration. A backend that fails to initialise
    /// leaves the service in the always-unavailable state.
    pub fn new(config: Config) -> Self {
        let backend = BackendFactory::create_optional(&config.backend_config);
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Config, backend: Option<Arc<dyn TranslationBackend>>) -> Self {
        let service = TranslationService::new(
            backend,
            config.backend_config.backend.as_str(),
            config.translation.clone(),
            Duration::from_secs(config.system_config.request_timeout_secs),
        )
        .with_fallback_when_unavailable(config.backend_config.serve_fallback_when_unavailable);

        Self {
            config,
            translation_service: Arc::new(service),
        }
    }
}
