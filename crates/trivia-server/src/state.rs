//! Shared application state, constructed once in `main` and injected.
//!
//! Provider clients are explicit fields rather than module-scope globals so
//! construction stays visible and the engine underneath can be exercised
//! with stubs in tests.

use std::sync::Arc;

use tracing::info;

use trivia_config::TriviaConfig;
use trivia_providers::{OpenAiClient, SupabaseStore};

pub struct AppState {
    pub config: TriviaConfig,
    pub openai: OpenAiClient,
    /// Present only when the similarity collaborator is configured; the
    /// generate path works without it.
    pub supabase: Option<SupabaseStore>,
}

impl AppState {
    #[must_use]
    pub fn new(config: TriviaConfig) -> Arc<Self> {
        let openai = OpenAiClient::new(&config.openai);

        let supabase = if config.supabase.is_configured() {
            Some(SupabaseStore::new(&config.supabase))
        } else {
            info!("supabase not configured, similarity checking disabled");
            None
        };

        Arc::new(Self {
            config,
            openai,
            supabase,
        })
    }
}
