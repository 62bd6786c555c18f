//! Provider error types.

use thiserror::Error;

/// Errors raised by the external collaborators.
///
/// At the retry layer these are all treated alike: a malformed body is
/// indistinguishable from a provider fault, so every variant is retriable.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered 2xx but the body does not have the expected
    /// shape.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The provider answered with an empty choice/content slot.
    #[error("Provider response contained no content")]
    MissingContent,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
