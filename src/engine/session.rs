//! Session — the root aggregate persisted between turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::phase::Phase;
use crate::engine::preferences::PreferenceRecord;
use crate::engine::quiz::QuizState;
use crate::llm::Role;

/// A single role-tagged utterance in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
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

/// Full per-session state of the conversation engine.
///
/// Invariants maintained by the engine:
/// - `chosen_place`, once set, is only cleared by a full reset, and is
///   always a member of `recommended_places` at the time it was set.
/// - `partners_shown` flips false→true exactly once, when `chosen_place`
///   first becomes set.
/// - `recommended_places` is empty or holds exactly the top-N names
///   whenever `recommendations_given` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub phase: Phase,
    /// Recommendation-phase transcript, append-only.
    pub transcript: Vec<ConversationTurn>,
    /// Extracted preferences; `None` until an extraction succeeds.
    pub preferences: Option<PreferenceRecord>,
    pub recommendations_given: bool,
    pub recommended_places: Vec<String>,
    pub chosen_place: Option<String>,
    /// Whether the one-time partner block has been emitted.
    pub partners_shown: bool,
    /// Quiz for the chosen destination; `None` before commitment or when
    /// no quiz entry matches.
    pub quiz: Option<QuizState>,
    /// Post-commitment Q&A transcript, separate from the main transcript.
    pub qa_transcript: Vec<ConversationTurn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Fresh default state for a new session id.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            phase: Phase::default(),
            transcript: Vec::new(),
            preferences: None,
            recommendations_given: false,
            recommended_places: Vec::new(),
            chosen_place: None,
            partners_shown: false,
            quiz: None,
            qa_transcript: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of user-authored turns in the main transcript.
    pub fn user_turns(&self) -> usize {
        self.transcript
            .iter()
            .filter(|t| t.role == Role::User)
            .count()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.transcript.push(ConversationTurn::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.transcript.push(ConversationTurn::model(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::quiz::QuizOutcome;

    #[test]
    fn new_session_defaults() {
        let session = Session::new("s-1");
        assert_eq!(session.phase, Phase::Collecting);
        assert!(session.transcript.is_empty());
        assert!(session.preferences.is_none());
        assert!(!session.recommendations_given);
        assert!(session.chosen_place.is_none());
        assert!(!session.partners_shown);
    }

    #[test]
    fn user_turns_counts_only_user_roles() {
        let mut session = Session::new("s-1");
        session.push_user("hello");
        session.push_model("salam!");
        session.push_user("beaches please");
        assert_eq!(session.user_turns(), 2);
    }

    #[test]
    fn serde_round_trip_preserves_state() {
        let mut session = Session::new("s-1");
        session.push_user("hi");
        session.push_model("salam");
        session.phase = Phase::Recommending;
        session.recommendations_given = true;
        session.recommended_places =
            vec!["Djerba Island".to_string(), "Hammamet".to_string()];
        session.preferences = Some(PreferenceRecord {
            style: "beach".to_string(),
            duration_days: 3,
            ..Default::default()
        });
        session.quiz = Some(QuizState::from_entry(
            crate::catalog::quiz_for_place("Djerba Island").unwrap(),
        ));

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.phase, Phase::Recommending);
        assert_eq!(parsed.transcript, session.transcript);
        assert_eq!(parsed.recommended_places, session.recommended_places);
        assert_eq!(parsed.preferences, session.preferences);
        assert_eq!(parsed.quiz.unwrap().outcome, QuizOutcome::Pending);
    }
}
