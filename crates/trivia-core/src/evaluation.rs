//! Quality evaluation types produced by the evaluator model call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The evaluator's overall judgment of a question.
///
/// The pipeline trusts this field verbatim: the five numeric scores inform
/// the optimizer prompt but are never thresholded system-side to overrule
/// the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores a freshly generated question along five axes, 1-10 each, plus the
/// overall pass/fail verdict. Produced by a model call per evaluation; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Is the question unambiguous and well phrased?
    #[schemars(range(min = 1, max = 10))]
    pub clarity: u8,

    /// Is the question appropriately challenging?
    #[schemars(range(min = 1, max = 10))]
    pub difficulty: u8,

    /// Distance from previously asked questions. Scored below 7 when the
    /// question is too similar to any prior one.
    #[schemars(range(min = 1, max = 10))]
    pub uniqueness: u8,

    /// Does the explanation actually explain the answer?
    #[schemars(range(min = 1, max = 10))]
    pub explanation_quality: u8,

    /// Does the hint help without spoiling?
    #[schemars(range(min = 1, max = 10))]
    pub hint_quality: u8,

    /// Overall judgment; the gate trusts this field.
    pub overall_verdict: Verdict,
}

impl EvaluationResult {
    /// Names of the axes scoring strictly below `floor`, for focusing the
    /// optimizer on what actually failed.
    #[must_use]
    pub fn weak_axes(&self, floor: u8) -> Vec<&'static str> {
        let mut weak = Vec::new();
        for (name, score) in [
            ("clarity", self.clarity),
            ("difficulty", self.difficulty),
            ("uniqueness", self.uniqueness),
            ("explanation quality", self.explanation_quality),
            ("hint quality", self.hint_quality),
        ] {
            if score < floor {
                weak.push(name);
            }
        }
        weak
    }
}
