//! Embedding-based duplicate detection.
//!
//! Optional collaborator: the generator path does not depend on it. Indexing
//! a freshly generated question and answering `/check-similarity` both go
//! through here.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use trivia_providers::{EmbeddingProvider, SimilarQuestion, VectorStore};

use crate::error::EngineError;

/// Result of a duplicate lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    pub is_similar: bool,
    pub similar_questions: Vec<SimilarQuestion>,
}

/// Embed `question` and look up stored questions within `threshold`.
///
/// `is_similar` is simply "the store returned at least one match".
///
/// # Errors
///
/// Returns [`EngineError::Provider`] when embedding or lookup fails.
#[instrument(skip(embedder, store, question))]
pub async fn check_similarity<E: EmbeddingProvider, V: VectorStore>(
    embedder: &E,
    store: &V,
    question: &str,
    threshold: f32,
    count: u32,
) -> Result<SimilarityReport, EngineError> {
    let embedding = embedder.embed(question).await?;
    let similar_questions = store.match_similar(&embedding, threshold, count).await?;

    debug!(matches = similar_questions.len(), "similarity lookup complete");
    Ok(SimilarityReport {
        is_similar: !similar_questions.is_empty(),
        similar_questions,
    })
}

/// Embed `question` and store it for future lookups.
///
/// Called after a successful generation; the caller logs failures instead of
/// failing the request over bookkeeping.
///
/// # Errors
///
/// Returns [`EngineError::Provider`] when embedding or insert fails.
pub async fn index_question<E: EmbeddingProvider, V: VectorStore>(
    embedder: &E,
    store: &V,
    question: &str,
) -> Result<(), EngineError> {
    let embedding = embedder.embed(question).await?;
    store.insert(question, &embedding).await?;
    Ok(())
}
