//! Session rules and the in-memory state one play-through mutates.
//!
//! A session is a fixed run of [`TOTAL_QUESTIONS`] questions. The player wins
//! by reaching [`required_score`] correct answers and starts with
//! [`default_hints`] hints. State lives only for the session: the server
//! never stores it, clients hold it in memory and discard it on reload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Questions per session.
pub const TOTAL_QUESTIONS: u32 = 15;

/// Fraction of questions that must be answered correctly to win.
pub const VICTORY_PERCENTAGE: f64 = 0.9;

/// Correct answers needed to win a session.
#[must_use]
pub fn required_score() -> u32 {
    let threshold = (f64::from(TOTAL_QUESTIONS) * VICTORY_PERCENTAGE).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let threshold = threshold as u32;
    threshold.max(1)
}

/// Hints a fresh session starts with.
#[must_use]
pub fn default_hints() -> u32 {
    required_score().min(3)
}

/// The session constants, shaped for clients (`GET /game-rules`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRules {
    pub total_questions: u32,
    pub required_score: u32,
    pub default_hints: u32,
}

impl GameRules {
    #[must_use]
    pub fn current() -> Self {
        Self {
            total_questions: TOTAL_QUESTIONS,
            required_score: required_score(),
            default_hints: default_hints(),
        }
    }
}

/// Mutable state of one play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Texts of questions already asked, in order. Fed back to the generator
    /// as a "do not repeat" hint.
    pub asked_questions: Vec<String>,
    /// Correct answers so far.
    pub score: u32,
    /// Hints left. Never increases within a session.
    pub hints_remaining: u32,
    /// 0-based index of the question currently shown.
    pub current_index: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            asked_questions: Vec::new(),
            score: 0,
            hints_remaining: default_hints(),
            current_index: 0,
        }
    }

    /// Record the outcome of the current question and advance.
    pub fn record_answer(&mut self, question_text: &str, correct: bool) {
        self.asked_questions.push(question_text.to_string());
        if correct {
            self.score += 1;
        }
        self.current_index += 1;
    }

    /// Spend a hint. Returns `false` when none remain.
    pub fn use_hint(&mut self) -> bool {
        if self.hints_remaining == 0 {
            return false;
        }
        self.hints_remaining -= 1;
        true
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.current_index >= TOTAL_QUESTIONS
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.score >= required_score()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
