//! OpenAI HTTP client implementing completion and embedding.
//!
//! Structured output uses the chat completions `response_format` of type
//! `json_schema` with `strict` mode, so the model is constrained to the
//! schema built from our wire types rather than asked nicely to emit JSON.

use serde::Deserialize;
use tracing::debug;

use trivia_config::OpenAiConfig;

use crate::completion::{CompletionProvider, StructuredRequest};
use crate::embedding::EmbeddingProvider;
use crate::error::ProviderError;

/// Client over the OpenAI REST API. Constructed once in `main` and injected;
/// the key is held privately and never logged.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    embedding_model: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            embedding_model: config.embedding_model.clone(),
        }
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("{path}: {e}")))
    }
}

impl CompletionProvider for OpenAiClient {
    async fn complete_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema_name,
                    "strict": true,
                    "schema": request.schema,
                },
            },
        });

        debug!(model = %self.model, schema = request.schema_name, "chat completion request");
        let raw = self.post_json("/chat/completions", &body).await?;

        let parsed: ChatResponse = serde_json::from_value(raw)
            .map_err(|e| ProviderError::MalformedResponse(format!("chat envelope: {e}")))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::MissingContent)?;

        serde_json::from_str(&content)
            .map_err(|e| ProviderError::MalformedResponse(format!("structured content: {e}")))
    }
}

impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let body = serde_json::json!({
            "model": self.embedding_model,
            "input": text,
        });

        debug!(model = %self.embedding_model, "embedding request");
        let raw = self.post_json("/embeddings", &body).await?;

        let parsed: EmbeddingResponse = serde_json::from_value(raw)
            .map_err(|e| ProviderError::MalformedResponse(format!("embedding envelope: {e}")))?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|row| row.embedding)
            .ok_or(ProviderError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = OpenAiClient::new(&OpenAiConfig {
            api_key: "sk-test".into(),
            base_url: "http://localhost:9999/v1/".into(),
            ..OpenAiConfig::default()
        });
        assert_eq!(client.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn chat_envelope_parses_content() {
        let raw = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"a\":1}" } }
            ]
        });
        let parsed: ChatResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[test]
    fn embedding_envelope_parses_vector() {
        let raw = serde_json::json!({
            "data": [ { "embedding": [0.25, -0.5] } ],
            "model": "text-embedding-ada-002"
        });
        let parsed: EmbeddingResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.data[0].embedding, vec![0.25, -0.5]);
    }
}
