//! Error types for Chouchane.

use std::time::Duration;

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Generation error: {0}")]
    Gen(#[from] GenError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open session store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Text-generation capability errors.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Generation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Invalid response from generation backend: {reason}")]
    InvalidResponse { reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Conversation engine errors — structural failures the caller must correct.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Invalid phase for this operation: {0}")]
    InvalidPhase(String),

    #[error("No quiz is available for destination '{0}'")]
    QuizUnavailable(String),

    #[error("The quiz for this session is already resolved")]
    QuizResolved,
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
