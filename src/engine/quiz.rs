//! Quiz state — one question, ordered hints, a hint budget.

use serde::{Deserialize, Serialize};

use crate::catalog::QuizEntry;

/// Outcome of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizOutcome {
    /// Awaiting an answer; hints may remain.
    Pending,
    /// Answered correctly.
    Correct,
    /// Hint budget spent without a correct answer.
    Exhausted,
}

/// Per-session quiz state for a chosen destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizState {
    pub destination: String,
    pub question: String,
    pub hints: Vec<String>,
    pub correct_answer: String,
    pub hints_used: usize,
    pub outcome: QuizOutcome,
}

/// Normalize quiz text for comparison: trim, lowercase, drop apostrophes,
/// hyphens become spaces.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace('\'', "").replace('-', " ")
}

impl QuizState {
    pub fn from_entry(entry: &QuizEntry) -> Self {
        Self {
            destination: entry.destination.to_string(),
            question: entry.question.to_string(),
            hints: entry.hints.iter().map(|h| h.to_string()).collect(),
            correct_answer: entry.answer.to_string(),
            hints_used: 0,
            outcome: QuizOutcome::Pending,
        }
    }

    /// The opening quiz banner.
    pub fn intro(&self) -> String {
        let bar = "═".repeat(55);
        format!(
            "\n{bar}\n  QUIZ TIME!  |  {}\n{bar}\n\n  {}\n\n  \
             Type your answer, or type 'hint' for a clue.\n  \
             (You have {} hint(s) available)\n",
            self.destination,
            self.question,
            self.hints.len()
        )
    }

    /// Reward tier on a correct answer: `max(1, 3 - hints_used)` stars.
    pub fn stars(&self) -> usize {
        3usize.saturating_sub(self.hints_used).max(1)
    }

    /// Process one quiz turn: a hint request or an answer attempt.
    /// Returns the message to show; mutates `hints_used` and `outcome`.
    pub fn respond(&mut self, input: &str) -> String {
        // Explicit hint request
        if normalize(input) == "hint" {
            if self.hints_used < self.hints.len() {
                let hint = self.hints[self.hints_used].clone();
                self.hints_used += 1;
                let remaining = self.hints.len() - self.hints_used;
                let mut msg = format!("\n  Hint {}: {}\n", self.hints_used, hint);
                if remaining > 0 {
                    msg.push_str(&format!(
                        "  ({remaining} hint{} left — try again or type 'hint')\n",
                        if remaining > 1 { "s" } else { "" }
                    ));
                } else {
                    msg.push_str("  (Last hint! Give it your best shot)\n");
                }
                return msg;
            }
            return "\n  No more hints available! Give your best answer.\n".to_string();
        }

        // Answer attempt
        if normalize(input) == normalize(&self.correct_answer) {
            self.outcome = QuizOutcome::Correct;
            let stars = "★".repeat(self.stars());
            let hint_note = if self.hints_used == 0 {
                "No hints used — perfect!".to_string()
            } else {
                format!("{} hint(s) used", self.hints_used)
            };
            return format!("\n  Correct!  {stars}\n  {hint_note}\n");
        }

        // Wrong, hints remain: auto-reveal the next one
        if self.hints_used < self.hints.len() {
            let hint = self.hints[self.hints_used].clone();
            self.hints_used += 1;
            let remaining = self.hints.len() - self.hints_used;
            let mut msg = format!("\n  Not quite! Here's hint {}: {}\n", self.hints_used, hint);
            if remaining > 0 {
                msg.push_str(&format!(
                    "  ({remaining} hint{} left — try again or type 'hint')\n",
                    if remaining > 1 { "s" } else { "" }
                ));
            } else {
                msg.push_str("  (Last hint! One more chance)\n");
            }
            return msg;
        }

        // Wrong with no hints left: quiz over
        self.outcome = QuizOutcome::Exhausted;
        format!(
            "\n  The correct answer was: {}\n  Better luck next time!\n",
            self.correct_answer
        )
    }

    /// Post-quiz summary block, shown once the outcome is resolved.
    pub fn summary(&self, chosen_place: &str) -> String {
        let verdict = match self.outcome {
            QuizOutcome::Correct => match self.hints_used {
                0 => "Impressive! You knew it without any help — you're a true Tunisia expert!"
                    .to_string(),
                1 => "Well done! Just one hint needed — not bad at all!".to_string(),
                n => format!("You got it with {n} hints. Practice makes perfect!"),
            },
            _ => "Better luck next time! A visit to Tunisia will teach you everything."
                .to_string(),
        };

        let bar = "═".repeat(55);
        format!(
            "\n{bar}\n  QUIZ RESULT  |  {}\n{bar}\n\n  {verdict}\n\n  \
             Enjoy your trip to {chosen_place}!\n{bar}\n",
            self.destination
        )
    }
}
