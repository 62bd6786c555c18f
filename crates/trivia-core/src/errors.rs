//! Cross-cutting error types for the trivia service.
//!
//! Domain-specific errors (`ProviderError`, `EngineError`, `AppError`) live
//! in their respective crates; this module only defines the errors that can
//! originate from the core types themselves.

use thiserror::Error;

/// Errors raised by core type validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (shape, range, distinctness constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
