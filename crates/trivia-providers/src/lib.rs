//! # trivia-providers
//!
//! External collaborators consumed by the trivia pipeline, each behind a
//! trait so the engine can be tested with stub implementations and no
//! network access:
//!
//! - [`CompletionProvider`]: schema-constrained structured output from a
//!   language model
//! - [`EmbeddingProvider`]: text -> numeric vector
//! - [`VectorStore`]: embedding storage and ranked similarity lookup
//!
//! [`OpenAiClient`] implements the first two over the OpenAI HTTP API;
//! [`SupabaseStore`] implements the third over PostgREST. The [`retry`]
//! module provides the bounded fixed-delay retry wrapper that is the
//! system's only resilience mechanism.

pub mod completion;
pub mod embedding;
pub mod error;
pub mod openai;
pub mod retry;
pub mod vector_store;

pub use completion::{CompletionProvider, StructuredRequest};
pub use embedding::EmbeddingProvider;
pub use error::ProviderError;
pub use openai::OpenAiClient;
pub use retry::{RetryConfig, retry};
pub use vector_store::{SimilarQuestion, SupabaseStore, VectorStore};
