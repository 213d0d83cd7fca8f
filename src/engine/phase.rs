//! Conversation phase machine — the single source of truth for which
//! operations are active.

use serde::{Deserialize, Serialize};

/// The phases of a travel-recommendation conversation.
///
/// Progresses linearly: Collecting → Recommending → Committed. Committed
/// is terminal; only a full session reset returns to Collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Gathering free-form preference signal.
    Collecting,
    /// Candidates issued, awaiting a selection.
    Recommending,
    /// Destination chosen; quiz and open Q&A are active.
    Committed,
}

impl Phase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Phase) -> bool {
        use Phase::*;
        matches!((self, target), (Collecting, Recommending) | (Recommending, Committed))
    }

    /// Whether this phase is terminal for the recommendation engine.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed)
    }

    /// The outward-facing phase tag: `yasmine` before commitment,
    /// `qa` after.
    pub fn public_label(&self) -> &'static str {
        match self {
            Self::Collecting | Self::Recommending => "yasmine",
            Self::Committed => "qa",
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Collecting
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Collecting => "collecting",
            Self::Recommending => "recommending",
            Self::Committed => "committed",
        };
        write!(f, "{s}")
    }
}
