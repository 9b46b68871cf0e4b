//! Edge gatekeeper middleware.
//!
//! Runs in front of every route and rejects requests whose auth cookie is
//! missing or structurally impossible to be valid. It deliberately takes no
//! application state: without access to ACCESS_CODE it can only check the
//! cookie's shape, and cryptographic validity stays with
//! [`crate::auth::verify::is_authenticated`], called by protected pages.

use crate::auth::session::{removal_cookie, session_token};
use crate::auth::token::is_token_format;
use crate::config::Config;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Path of the login page; the one page the gate always lets through.
pub const LOGIN_PATH: &str = "/connexion";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Gate decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Forward the request unmodified.
    Allow,
    /// No auth cookie: redirect to login, preserving the destination.
    RedirectNoSession,
    /// Cookie present but not shaped like a derived token: redirect to
    /// login and delete the cookie so the client does not loop on it.
    RedirectInvalidFormat,
}

/// Paths the gate never blocks: the login page itself, static assets and
/// favicon/icon files.
fn is_public_path(path: &str) -> bool {
    path == LOGIN_PATH
        || path.starts_with("/static")
        || path.starts_with("/favicon")
        || path.ends_with(".svg")
        || path.ends_with(".ico")
}

/// Decide what to do with a request, given its path and auth cookie value.
///
/// Pure so it can be tested without a request in flight; the middleware
/// below only maps the outcome onto a response.
pub fn gate_request(path: &str, token: Option<&str>) -> GateOutcome {
    if is_public_path(path) {
        return GateOutcome::Allow;
    }

    let Some(token) = token else {
        return GateOutcome::RedirectNoSession;
    };

    if !is_token_format(token) {
        return GateOutcome::RedirectInvalidFormat;
    }

    GateOutcome::Allow
}

/// Axum middleware applying [`gate_request`] to every inbound request.
pub async fn access_gate(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    match gate_request(&path, session_token(&jar)) {
        GateOutcome::Allow => next.run(request).await,
        GateOutcome::RedirectNoSession => {
            Redirect::temporary(&login_redirect(&path)).into_response()
        }
        GateOutcome::RedirectInvalidFormat => {
            tracing::warn!(action = "invalid_token_format", path = %path, "Deleting malformed auth cookie");
            let jar = jar.remove(removal_cookie());
            (jar, Redirect::temporary(&login_redirect(&path))).into_response()
        }
    }
}

/// Login URL carrying the original destination, so a successful login can
/// return the user where they were headed.
fn login_redirect(path: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, path)
}
