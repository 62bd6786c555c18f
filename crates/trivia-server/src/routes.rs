//! Request handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::{info, warn};

use trivia_core::{GameRules, Language, TriviaQuestion};
use trivia_engine::{
    SimilarityReport, check_similarity, generate_question, index_question, refine_question,
};
use trivia_providers::RetryConfig;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionRequest {
    pub topic: String,
    #[serde(default)]
    pub previous_questions: Vec<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct CheckSimilarityRequest {
    pub question: String,
}

/// `POST /generate-question`: generate -> quality gate -> index embedding.
pub async fn generate_question_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateQuestionRequest>,
) -> Result<Json<TriviaQuestion>, AppError> {
    let pipeline = &state.config.pipeline;
    let retry_config = RetryConfig::from(pipeline);

    let question = generate_question(
        &state.openai,
        &retry_config,
        &payload.topic,
        &payload.previous_questions,
        payload.language,
    )
    .await
    .map_err(AppError::Generation)?;

    let question = if pipeline.quality_gate {
        let (question, outcome) = refine_question(
            &state.openai,
            question,
            &payload.previous_questions,
            pipeline.max_optimize_cycles,
        )
        .await;
        info!(?outcome, "quality gate finished");
        question
    } else {
        question
    };

    // Bookkeeping for future duplicate lookups. Never fails the request.
    if let Some(store) = &state.supabase {
        if let Err(error) = index_question(&state.openai, store, &question.question).await {
            warn!("failed to index question embedding: {error}");
        }
    }

    Ok(Json(question))
}

/// `POST /check-similarity`: embedding lookup against stored questions.
pub async fn check_similarity_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckSimilarityRequest>,
) -> Result<Json<SimilarityReport>, AppError> {
    let store = state
        .supabase
        .as_ref()
        .ok_or(AppError::SimilarityUnavailable)?;

    let report = check_similarity(
        &state.openai,
        store,
        &payload.question,
        state.config.supabase.match_threshold,
        state.config.supabase.match_count,
    )
    .await
    .map_err(AppError::Similarity)?;

    Ok(Json(report))
}

/// `GET /game-rules`: session constants shared with clients.
pub async fn game_rules_handler() -> Json<GameRules> {
    Json(GameRules::current())
}

/// `GET /health`: liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_payload_defaults_apply() {
        let payload: GenerateQuestionRequest =
            serde_json::from_str(r#"{ "topic": "astronomy" }"#).unwrap();
        assert_eq!(payload.topic, "astronomy");
        assert!(payload.previous_questions.is_empty());
        assert_eq!(payload.language, Language::En);
    }

    #[test]
    fn generate_payload_reads_camel_case_history() {
        let payload: GenerateQuestionRequest = serde_json::from_str(
            r#"{ "topic": "cine", "previousQuestions": ["q1"], "language": "es" }"#,
        )
        .unwrap();
        assert_eq!(payload.previous_questions, vec!["q1"]);
        assert_eq!(payload.language, Language::Es);
    }
}
