pub mod fallback;
pub mod prompt;
pub mod service;
pub mod types;

pub use fallback::fallback;
pub use service::TranslationService;
pub use types::*;
