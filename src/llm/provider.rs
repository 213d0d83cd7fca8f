//! `TextGenerator` — the injected text-generation capability.
//!
//! The engine never talks to a concrete backend; it receives an
//! `Arc<dyn TextGenerator>` and hands it a transcript plus a system
//! instruction per call.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Speaker role in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The traveler.
    User,
    /// The agent (generation backend output).
    Model,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// A single role-tagged message sent to the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// A generation request: transcript plus a per-call system instruction.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub messages: Vec<ChatMessage>,
    pub system_instruction: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(messages: Vec<ChatMessage>, system_instruction: impl Into<String>) -> Self {
        Self {
            messages,
            system_instruction: system_instruction.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from the generation backend.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub text: String,
}

/// Backend-agnostic text-generation trait.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for the given transcript and system instruction.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenError>;

    /// Name of the underlying model.
    fn model_name(&self) -> &str;
}

/// Deterministic generator that replays a scripted list of replies.
///
/// Used by tests and by offline demo mode; replies are consumed in order
/// and every request is recorded for inspection.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
    fallback: String,
}

impl ScriptedGenerator {
    /// Create a generator that replays `replies` in order, then repeats
    /// a fixed fallback reply once the script is exhausted.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
            fallback: "Okay.".to_string(),
        }
    }

    /// Append more replies to the script.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies
            .lock()
            .expect("script mutex poisoned")
            .push_back(reply.into());
    }

    /// All requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .expect("request log mutex poisoned")
            .clone()
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests
            .lock()
            .expect("request log mutex poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenError> {
        self.requests
            .lock()
            .expect("request log mutex poisoned")
            .push(request);
        let text = self
            .replies
            .lock()
            .expect("script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(GenerationResponse { text })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
