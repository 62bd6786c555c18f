//! # trivia-core
//!
//! Core types and rules shared across the trivia service crates:
//! - Wire types for questions and quality evaluations
//! - Invariant validation for model-produced questions
//! - Supported languages
//! - Session rules (question count, victory threshold, hint budget)
//! - Cross-cutting error types

pub mod errors;
pub mod evaluation;
pub mod language;
pub mod question;
pub mod session;

pub use errors::CoreError;
pub use evaluation::{EvaluationResult, Verdict};
pub use language::Language;
pub use question::{OPTION_COUNT, TriviaQuestion};
pub use session::{GameRules, SessionState, TOTAL_QUESTIONS, VICTORY_PERCENTAGE};
