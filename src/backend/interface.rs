use async_trait::async_trait;
use tracing::warn;

use crate::config::TranslationSettings;
use crate::error::BackendError;

/// A completion service that can carry out a translation prompt.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Short backend identifier, used in routes and messages ("groq", "ollama")
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn base_url(&self) -> &str;

    /// Confidence reported for translations produced by this backend.
    /// Fixed per backend; no model signal is involved.
    fn confidence(&self) -> f32;

    /// One health probe against the backend.
    async fn probe(&self) -> Result<(), BackendError>;

    /// Single-turn completion of `prompt`, returning the raw generated text.
    async fn complete(
        &self,
        prompt: &str,
        settings: &TranslationSettings,
    ) -> Result<String, BackendError>;

    /// `probe` folded to a boolean. Never cached; every call hits the network.
    async fn is_available(&self) -> bool {
        match self.probe().await {
            Ok(()) => true,
            Err(e) => {
                warn!("{} health check failed: {}", self.name(), e);
                false
            }
        }
    }
}
