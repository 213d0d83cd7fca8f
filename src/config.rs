//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Conversation engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// User-turn count that triggers preference extraction.
    pub extraction_turn_threshold: usize,
    /// Number of destinations recommended after ranking.
    pub top_n: usize,
    /// Bounded timeout for a single generation call.
    pub generation_timeout: Duration,
    /// Retries after a failed or timed-out generation call.
    pub generation_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extraction_turn_threshold: 5,
            top_n: 2,
            generation_timeout: Duration::from_secs(30),
            generation_retries: 1,
        }
    }
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port for the HTTP API.
    pub port: u16,
    /// Path to the session database file.
    pub db_path: String,
    /// Generation model name.
    pub model: String,
}

impl ServerConfig {
    /// Read server configuration from `CHOUCHANE_*` environment variables,
    /// falling back to defaults where unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("CHOUCHANE_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CHOUCHANE_PORT".to_string(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 8000,
        };

        let db_path = std::env::var("CHOUCHANE_DB_PATH")
            .unwrap_or_else(|_| "./data/chouchane.db".to_string());

        let model =
            std::env::var("CHOUCHANE_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        Ok(Self {
            port,
            db_path,
            model,
        })
    }
}
