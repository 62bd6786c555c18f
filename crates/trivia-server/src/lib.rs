//! # trivia-server
//!
//! HTTP surface for the trivia question service.
//!
//! Routes:
//! - `POST /generate-question` — generate one question, quality-gated
//! - `POST /check-similarity` — embedding-based duplicate lookup
//! - `GET /game-rules` — session constants for clients
//! - `GET /health` — liveness probe
//!
//! Requests are independent: no shared mutable state, no session registry.
//! All pipeline failures collapse to a uniform `{"error": ...}` JSON body
//! with a 500 status at this boundary.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use trivia_config::TriviaConfig;

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use routes::{
    check_similarity_handler, game_rules_handler, generate_question_handler, health_handler,
};

/// Build the application router over an already-constructed state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/generate-question", post(generate_question_handler))
        .route("/check-similarity", post(check_similarity_handler))
        .route("/game-rules", get(game_rules_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until ctrl-c or SIGTERM.
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server loop fails.
pub async fn start_server(config: TriviaConfig) -> anyhow::Result<()> {
    let address = config.server.address();
    let state = AppState::new(config);
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
