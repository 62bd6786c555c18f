//! Pipeline error types.

use thiserror::Error;

use trivia_core::CoreError;
use trivia_providers::ProviderError;

/// Errors the pipeline can surface to the request handler.
///
/// A malformed model body is reported as [`ProviderError::MalformedResponse`]
/// wrapped here, so the retry layer treats it exactly like a provider fault.
///
/// [`ProviderError::MalformedResponse`]: trivia_providers::ProviderError::MalformedResponse
#[derive(Debug, Error)]
pub enum EngineError {
    /// An external collaborator failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The model produced parseable JSON that violates a domain invariant.
    #[error("Generated question is invalid: {0}")]
    InvalidQuestion(#[from] CoreError),
}
