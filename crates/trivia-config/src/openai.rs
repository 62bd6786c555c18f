//! OpenAI provider configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-ada-002".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key (`sk-...`). The only required field.
    #[serde(default)]
    pub api_key: String,

    /// API base URL. Override to point at a proxy or compatible provider.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Chat model used for generation, evaluation, and optimization.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model used for question embeddings.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            embedding_model: default_embedding_model(),
        }
    }
}

impl OpenAiConfig {
    /// Check if the minimum required fields for API access are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
