//! Chouchane — a multi-phase Tunisia travel recommendation engine.
//!
//! A session moves through three phases: preference collection (free
//! conversation until enough turns accumulate to extract a structured
//! preference record), recommendation (two ranked destinations from the
//! built-in catalog), and commitment (partner listings, a destination
//! quiz, and open Q&A with a Tunisia expert persona).

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod llm;
pub mod store;

pub use error::{Error, Result};
