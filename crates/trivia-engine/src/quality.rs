//! The quality gate: evaluate/optimize cycles over a generated question.
//!
//! ```text
//! GENERATED -> evaluate -> EVALUATED
//!   pass                        -> ACCEPT (unchanged)
//!   fail, cycles left           -> optimize -> GENERATED, cycle += 1
//!   cycle budget spent          -> ACCEPT-UNVERIFIED (most recent question)
//!   unparseable model output    -> ACCEPT-UNVERIFIED (last known-good)
//! ```
//!
//! The gate never fails a request once the initial generation succeeded:
//! malformed evaluator or optimizer output degrades to returning the last
//! good question. The model's own verdict field is trusted verbatim; no
//! numeric thresholds are applied system-side.

use schemars::schema_for;
use tracing::{debug, instrument, warn};

use trivia_core::{EvaluationResult, TriviaQuestion};
use trivia_providers::{CompletionProvider, ProviderError, StructuredRequest};

use crate::generator::{parse_question, question_schema};
use crate::prompts;

/// How the gate terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The evaluator passed the question.
    Accepted,
    /// The cycle budget ran out or a model response was unusable; the
    /// question is returned without a passing evaluation.
    AcceptedUnverified,
}

/// Run `question` through at most `max_cycles` evaluate/optimize cycles.
///
/// Always returns a question: the input one, or the most recent revision
/// that parsed and validated.
#[instrument(skip(provider, question, previous_questions))]
pub async fn refine_question<P: CompletionProvider>(
    provider: &P,
    question: TriviaQuestion,
    previous_questions: &[String],
    max_cycles: u32,
) -> (TriviaQuestion, GateOutcome) {
    let mut current = question;

    for cycle in 0..max_cycles {
        let evaluation = match evaluate(provider, &current, previous_questions).await {
            Ok(evaluation) => evaluation,
            Err(error) => {
                warn!(cycle, "evaluator output unusable: {error}, accepting unverified");
                return (current, GateOutcome::AcceptedUnverified);
            }
        };

        debug!(
            cycle,
            verdict = %evaluation.overall_verdict,
            clarity = evaluation.clarity,
            uniqueness = evaluation.uniqueness,
            "evaluation complete"
        );

        if evaluation.overall_verdict.is_pass() {
            return (current, GateOutcome::Accepted);
        }

        match optimize(provider, &current, &evaluation).await {
            Ok(revised) => current = revised,
            Err(error) => {
                warn!(cycle, "optimizer output unusable: {error}, accepting unverified");
                return (current, GateOutcome::AcceptedUnverified);
            }
        }
    }

    warn!(max_cycles, "cycle budget spent without a pass, accepting unverified");
    (current, GateOutcome::AcceptedUnverified)
}

/// One evaluator call: score the question on the five axes.
async fn evaluate<P: CompletionProvider>(
    provider: &P,
    question: &TriviaQuestion,
    previous_questions: &[String],
) -> Result<EvaluationResult, ProviderError> {
    let request = StructuredRequest {
        system: prompts::evaluator_system(),
        user: prompts::evaluator_user(question, previous_questions),
        schema_name: "question_evaluation",
        schema: serde_json::to_value(schema_for!(EvaluationResult))
            .map_err(|e| ProviderError::MalformedResponse(format!("evaluation schema: {e}")))?,
    };

    let value = provider.complete_structured(&request).await?;
    serde_json::from_value(value)
        .map_err(|e| ProviderError::MalformedResponse(format!("evaluation body: {e}")))
}

/// One optimizer call: revise the weak axes, preserving the question schema.
async fn optimize<P: CompletionProvider>(
    provider: &P,
    question: &TriviaQuestion,
    evaluation: &EvaluationResult,
) -> Result<TriviaQuestion, ProviderError> {
    let request = StructuredRequest {
        system: prompts::optimizer_system(),
        user: prompts::optimizer_user(question, evaluation),
        schema_name: "trivia_question",
        schema: question_schema(),
    };

    let value = provider.complete_structured(&request).await?;
    parse_question(value).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}
