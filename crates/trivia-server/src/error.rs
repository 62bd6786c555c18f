//! Request-boundary error mapping.
//!
//! Every internal failure is caught here and converted to a uniform
//! `{"error": message}` JSON body with a 500 status; no partial structured
//! data is ever returned alongside an error. The underlying cause is logged,
//! the client only sees the generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use trivia_engine::EngineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to generate question")]
    Generation(#[source] EngineError),

    #[error("Failed to check similarity")]
    Similarity(#[source] EngineError),

    #[error("Similarity checking is not configured")]
    SimilarityUnavailable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Generation(source) | Self::Similarity(source) => {
                error!("request failed: {self}: {source}");
            }
            Self::SimilarityUnavailable => {
                error!("request failed: {self}");
            }
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
