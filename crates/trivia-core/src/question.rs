//! The multiple-choice question wire type and its invariants.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice trivia question.
///
/// This is both the HTTP response body and the contract the language model
/// is asked to fill via a strict JSON Schema built from this type. Field
/// names are camelCase on the wire (`correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    /// The question text shown to the player.
    pub question: String,

    /// Exactly four answer options, in display order.
    #[schemars(length(equal = 4))]
    pub options: Vec<String>,

    /// 0-based index into `options` of the correct answer.
    #[schemars(range(max = 3))]
    pub correct_answer: usize,

    /// Short explanation of why the correct answer is correct.
    pub explanation: String,

    /// A hint that narrows the field without giving the answer away.
    pub hint: String,
}

impl TriviaQuestion {
    /// Check the invariants the schema promises but an external response
    /// cannot be trusted to uphold.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the question text is empty,
    /// the option count is not exactly [`OPTION_COUNT`], any option is empty
    /// or duplicated, or `correct_answer` is out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.question.trim().is_empty() {
            return Err(CoreError::Validation("question text is empty".into()));
        }

        if self.options.len() != OPTION_COUNT {
            return Err(CoreError::Validation(format!(
                "expected {OPTION_COUNT} options, got {}",
                self.options.len()
            )));
        }

        for (i, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(CoreError::Validation(format!("option {i} is empty")));
            }
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(CoreError::Validation(format!(
                    "option {i} duplicates an earlier option: {option}"
                )));
            }
        }

        if self.correct_answer >= self.options.len() {
            return Err(CoreError::Validation(format!(
                "correctAnswer {} out of range for {} options",
                self.correct_answer,
                self.options.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TriviaQuestion {
        TriviaQuestion {
            question: "Which planet has the most moons?".into(),
            options: vec![
                "Saturn".into(),
                "Jupiter".into(),
                "Uranus".into(),
                "Neptune".into(),
            ],
            correct_answer: 0,
            explanation: "Saturn overtook Jupiter after 62 new moons were confirmed in 2023."
                .into(),
            hint: "It is famous for its rings.".into(),
        }
    }

    #[test]
    fn valid_question_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn wrong_option_count_rejected() {
        let mut q = sample();
        q.options.pop();
        assert!(q.validate().is_err());
    }

    #[test]
    fn out_of_range_answer_rejected() {
        let mut q = sample();
        q.correct_answer = 4;
        assert!(q.validate().is_err());
    }

    #[test]
    fn duplicate_options_rejected() {
        let mut q = sample();
        q.options[3] = q.options[0].clone();
        assert!(q.validate().is_err());
    }

    #[test]
    fn empty_question_rejected() {
        let mut q = sample();
        q.question = "  ".into();
        assert!(q.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("correctAnswer").is_some());
        assert!(json.get("correct_answer").is_none());
    }
}
