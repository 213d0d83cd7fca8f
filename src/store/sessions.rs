//! libSQL session store — one JSON state row per session.
//!
//! Sessions are written whole on every turn; last write wins. Supports
//! local file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::{debug, info};

use crate::engine::session::Session;
use crate::error::StoreError;

/// Async persistence contract for conversation sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a fresh session. Overwrites any existing row with the same id.
    async fn create(&self, session: &Session) -> Result<(), StoreError>;

    /// Load a session by id.
    async fn get(&self, id: &str) -> Result<Session, StoreError>;

    /// Persist the full session state. Last write wins.
    async fn put(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove a session. Deleting a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// libSQL-backed session store.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlSessionStore {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id TEXT PRIMARY KEY,
    state TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

impl LibSqlSessionStore {
    /// Open (or create) a local database file and ensure the schema.
    pub async fn new_local(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("Failed to create database directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Session store opened");
        Ok(store)
    }

    /// Create an in-memory store (for tests).
    pub async fn new_memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute(SCHEMA, ())
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create schema: {e}")))?;
        Ok(())
    }

    async fn upsert(&self, session: &Session) -> Result<(), StoreError> {
        let state = serde_json::to_string(session)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO sessions (id, state, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET state = ?2, updated_at = ?4",
                params![
                    session.id.clone(),
                    state,
                    session.created_at.to_rfc3339(),
                    session.updated_at.to_rfc3339(),
                ],
            )
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for LibSqlSessionStore {
    async fn create(&self, session: &Session) -> Result<(), StoreError> {
        debug!(session_id = %session.id, "Creating session");
        self.upsert(session).await
    }

    async fn get(&self, id: &str) -> Result<Session, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT state FROM sessions WHERE id = ?1", params![id])
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let row = rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let state: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
        serde_json::from_str(&state).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn put(&self, session: &Session) -> Result<(), StoreError> {
        self.upsert(session).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM sessions WHERE id = ?1", params![id])
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }
}
