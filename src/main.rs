//! LBB Tools application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Build router with pages, auth endpoints + static file serving
//! 3. Apply access gate and security headers middleware
//! 4. Start Axum server

use lbb_tools::{auth::middleware::AppState, config::Config, routes};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting lbb-tools on {}", config.bind_addr);

    let bind_addr = config.bind_addr;
    let state = AppState {
        config: Arc::new(config),
    };

    let app = routes::app(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
