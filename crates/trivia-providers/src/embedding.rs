//! Text embedding provider.

use std::future::Future;

use crate::error::ProviderError;

/// Turns a question text into a numeric vector for similarity lookups.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status,
    /// or a response missing the embedding payload.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, ProviderError>> + Send;
}
