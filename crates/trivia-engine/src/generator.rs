//! Question generation: one schema-constrained model call, retry-wrapped.

use schemars::schema_for;
use tracing::{debug, instrument};

use trivia_core::{Language, TriviaQuestion};
use trivia_providers::{CompletionProvider, RetryConfig, StructuredRequest, retry};

use crate::error::EngineError;
use crate::prompts;

/// JSON Schema the generator and optimizer constrain model output to.
///
/// # Panics
///
/// Panics if `serde_json::to_value` fails on the schemars output. This is
/// not expected in practice because schemars always produces valid
/// JSON-serialisable output.
#[must_use]
pub fn question_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(TriviaQuestion)).unwrap()
}

/// Generate one trivia question about `topic`, avoiding `previous_questions`.
///
/// The whole attempt — model call, parse, invariant validation — sits inside
/// the retry wrapper: a schema-invalid body is indistinguishable from a
/// provider fault at this layer, so both consume an attempt. Exhausting the
/// budget surfaces the last error.
///
/// # Errors
///
/// Returns [`EngineError`] once all attempts fail.
#[instrument(
    skip(provider, retry_config, previous_questions, language),
    fields(history = previous_questions.len(), %language)
)]
pub async fn generate_question<P: CompletionProvider>(
    provider: &P,
    retry_config: &RetryConfig,
    topic: &str,
    previous_questions: &[String],
    language: Language,
) -> Result<TriviaQuestion, EngineError> {
    let request = StructuredRequest {
        system: prompts::generator_system(language),
        user: prompts::generator_user(topic, previous_questions),
        schema_name: "trivia_question",
        schema: question_schema(),
    };

    retry(retry_config, "question generation", || async {
        let value = provider.complete_structured(&request).await?;
        parse_question(value)
    })
    .await
}

/// Deserialize and validate a model-produced question body.
pub(crate) fn parse_question(value: serde_json::Value) -> Result<TriviaQuestion, EngineError> {
    let question: TriviaQuestion = serde_json::from_value(value).map_err(|e| {
        trivia_providers::ProviderError::MalformedResponse(format!("question body: {e}"))
    })?;
    question.validate()?;
    debug!(question = %question.question, "parsed generated question");
    Ok(question)
}
