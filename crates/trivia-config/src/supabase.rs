//! Supabase vector store configuration.
//!
//! Optional collaborator: the question generator works without it, the
//! similarity endpoint requires it.

use serde::{Deserialize, Serialize};

/// Default cosine-similarity threshold above which two questions count as
/// duplicates.
const fn default_match_threshold() -> f32 {
    0.8
}

/// Default number of nearest neighbours returned per lookup.
const fn default_match_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g., `https://abc123.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Service-role key. Grants full table access, server-side only.
    #[serde(default)]
    pub service_role_key: String,

    /// Similarity threshold passed to the `match_questions` RPC.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f32,

    /// Maximum matches returned by the `match_questions` RPC.
    #[serde(default = "default_match_count")]
    pub match_count: u32,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            match_threshold: default_match_threshold(),
            match_count: default_match_count(),
        }
    }
}

impl SupabaseConfig {
    /// Check if the minimum required fields for store access are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.service_role_key.is_empty()
    }
}
