//! The multi-phase travel conversation engine.
//!
//! `machine::ConversationEngine` is the public entry point; the submodules
//! hold the phase model, preference extraction, retrieval ranking, lexical
//! detectors, quiz mechanics, and prompt text it composes.

pub mod detect;
pub mod machine;
pub mod phase;
pub mod preferences;
pub mod prompts;
pub mod quiz;
pub mod retrieval;
pub mod session;

pub use machine::{ConversationEngine, TurnOutput};
pub use phase::Phase;
pub use preferences::{PreferenceExtractor, PreferenceRecord};
pub use quiz::{QuizOutcome, QuizState};
pub use session::{ConversationTurn, Session};
