//! Route handlers.

pub mod auth;
pub mod pages;

use crate::auth::middleware::{access_gate, AppState, LOGIN_PATH};
use crate::middleware::security_headers;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Build the application router.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .route(LOGIN_PATH, get(auth::login_page).post(auth::login))
        .route("/deconnexion", post(auth::logout))
}

/// Assemble the full service: routes, static file serving, and the
/// middleware stack. The access gate is the outermost layer so it screens
/// every request, static assets included (they are on its allow-list).
pub fn app(state: AppState) -> Router {
    // Explicit CORS: deny all cross-origin requests (single-origin deployment).
    // CorsLayer::new() with no allowed origins rejects all CORS preflight requests.
    app_router()
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::new())
        .layer(axum::middleware::from_fn(security_headers))
        .layer(axum::middleware::from_fn(access_gate))
        .with_state(state)
}
