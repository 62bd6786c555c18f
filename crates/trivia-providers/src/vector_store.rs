//! Embedding storage and ranked similarity lookup.
//!
//! The production implementation talks to a Supabase project over PostgREST:
//! inserts land in the `question_embeddings` table, lookups go through the
//! `match_questions` database function (pgvector cosine distance).

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

use trivia_config::SupabaseConfig;

use crate::error::ProviderError;

/// One ranked match from a similarity lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarQuestion {
    pub question: String,
    pub similarity: f32,
}

/// Stores question embeddings and answers nearest-neighbour queries.
pub trait VectorStore: Send + Sync {
    /// Persist `question` with its `embedding`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure or non-success status.
    fn insert(
        &self,
        question: &str,
        embedding: &[f32],
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Return up to `count` stored questions whose similarity to `embedding`
    /// is at least `threshold`, best match first.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status,
    /// or an unparseable result set.
    fn match_similar(
        &self,
        embedding: &[f32],
        threshold: f32,
        count: u32,
    ) -> impl Future<Output = Result<Vec<SimilarQuestion>, ProviderError>> + Send;
}

/// PostgREST-backed vector store on a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    url: String,
    service_role_key: String,
}

impl SupabaseStore {
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.url.trim_end_matches('/').to_string(),
            service_role_key: config.service_role_key.clone(),
        }
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.service_role_key),
            )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl VectorStore for SupabaseStore {
    async fn insert(&self, question: &str, embedding: &[f32]) -> Result<(), ProviderError> {
        let response = self
            .authed(self.http.post(format!("{}/rest/v1/question_embeddings", self.url)))
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({
                "question": question,
                "embedding": embedding,
            }))
            .send()
            .await?;

        Self::check_status(response).await?;
        debug!("stored embedding for question");
        Ok(())
    }

    async fn match_similar(
        &self,
        embedding: &[f32],
        threshold: f32,
        count: u32,
    ) -> Result<Vec<SimilarQuestion>, ProviderError> {
        let response = self
            .authed(self.http.post(format!("{}/rest/v1/rpc/match_questions", self.url)))
            .json(&serde_json::json!({
                "query_embedding": embedding,
                "match_threshold": threshold,
                "match_count": count,
            }))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response
            .json::<Vec<SimilarQuestion>>()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("match_questions: {e}")))
    }
}
