//! Text-generation integration for Chouchane.
//!
//! The engine depends only on the `TextGenerator` trait; the concrete
//! Gemini backend lives behind `create_generator`.

mod gemini;
pub mod provider;

pub use gemini::GeminiGenerator;
pub use provider::{
    ChatMessage, GenerationRequest, GenerationResponse, Role, ScriptedGenerator, TextGenerator,
};

use std::sync::Arc;
use std::time::Duration;

/// Supported generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenBackend {
    Gemini,
}

/// Configuration for creating a generator.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub backend: GenBackend,
    pub api_key: secrecy::SecretString,
    pub model: String,
    pub timeout: Duration,
    pub retries: u32,
}

/// Create a text generator from configuration.
pub fn create_generator(config: &GenConfig) -> Arc<dyn TextGenerator> {
    match config.backend {
        GenBackend::Gemini => {
            tracing::info!("Using Gemini (model: {})", config.model);
            Arc::new(
                GeminiGenerator::new(config.api_key.clone(), &config.model)
                    .with_timeout(config.timeout)
                    .with_retries(config.retries),
            )
        }
    }
}
