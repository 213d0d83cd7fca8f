//! Session persistence.

mod sessions;

pub use sessions::{LibSqlSessionStore, SessionStore};
