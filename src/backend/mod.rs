pub mod factory;
pub mod groq;
pub mod interface;
pub mod ollama;

pub use factory::BackendFactory;
pub use groq::GroqBackend;
pub use interface::TranslationBackend;
pub use ollama::OllamaBackend;
