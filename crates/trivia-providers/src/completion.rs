//! Schema-constrained language model completion.

use std::future::Future;

use crate::error::ProviderError;

/// One structured-output request: two prompts plus the JSON Schema the
/// response must conform to.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// System instruction (language, role, formatting rules).
    pub system: String,
    /// User instruction (topic, do-not-repeat list, task).
    pub user: String,
    /// Name the provider attaches to the schema.
    pub schema_name: &'static str,
    /// JSON Schema the response must satisfy, from `schemars::schema_for!`.
    pub schema: serde_json::Value,
}

/// A language model that can answer with JSON constrained to a schema.
///
/// Implementations return the raw JSON value; callers deserialize and
/// validate against their domain types. Injected everywhere instead of a
/// module-scope client so tests can substitute scripted stubs.
pub trait CompletionProvider: Send + Sync {
    /// Submit `request` and return the structured JSON the model produced.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status,
    /// or a response body without parseable content.
    fn complete_structured(
        &self,
        request: &StructuredRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ProviderError>> + Send;
}
