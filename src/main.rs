use std::path::Path;
use std::sync::Arc;

use chouchane::config::{EngineConfig, ServerConfig};
use chouchane::engine::ConversationEngine;
use chouchane::http::{AppState, router};
use chouchane::llm::{GenBackend, GenConfig, create_generator};
use chouchane::store::LibSqlSessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Read API key from environment
    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: GEMINI_API_KEY not set");
        eprintln!("  export GEMINI_API_KEY=...");
        std::process::exit(1);
    });

    let server_config = ServerConfig::from_env()?;
    let engine_config = EngineConfig::default();

    let generator = create_generator(&GenConfig {
        backend: GenBackend::Gemini,
        api_key: secrecy::SecretString::from(api_key),
        model: server_config.model.clone(),
        timeout: engine_config.generation_timeout,
        retries: engine_config.generation_retries,
    });

    let store = Arc::new(LibSqlSessionStore::new_local(Path::new(&server_config.db_path)).await?);
    let engine = Arc::new(ConversationEngine::new(store, generator, engine_config));

    let app = router(AppState { engine });
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server_config.port)).await?;

    eprintln!("Chouchane — Tunisia travel engine");
    eprintln!("  Model:    {}", server_config.model);
    eprintln!("  Database: {}", server_config.db_path);
    eprintln!("  Listening on http://0.0.0.0:{}", server_config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
