//! Login and logout endpoints.

use crate::auth::middleware::{AppState, LOGIN_PATH};
use crate::auth::session::{create_session, destroy_session};
use crate::auth::verify::verify_access_code;
use crate::error::AppError;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default = "default_redirect")]
    pub redirect: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub code: String,
    #[serde(default = "default_redirect")]
    pub redirect: String,
}

fn default_redirect() -> String {
    "/".to_string()
}

/// Clamp a caller-supplied destination to a same-origin relative path.
/// Anything not starting with `/` becomes `/`.
fn safe_redirect(destination: &str) -> &str {
    if destination.starts_with('/') {
        destination
    } else {
        "/"
    }
}

/// Minimal HTML escaping for attribute values embedded in the login page.
fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// GET /connexion — Login page
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    let destination = html_escape(safe_redirect(&query.redirect));

    Html(format!(
        r#"<!doctype html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Connexion — LBB Tools</title>
  <link rel="stylesheet" href="/static/app.css">
</head>
<body>
  <main class="login">
    <h1>Connexion</h1>
    <form method="post" action="{LOGIN_PATH}">
      <label for="code">Code d'acc&egrave;s</label>
      <input id="code" name="code" type="password" required autofocus autocomplete="current-password">
      <input type="hidden" name="redirect" value="{destination}">
      <button type="submit">Connexion</button>
    </form>
  </main>
</body>
</html>
"#
    ))
}

/// POST /connexion — Verify the access code and establish the session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    if form.code.is_empty() {
        return Err(AppError::BadRequest("Le code d'accès est requis".to_string()));
    }

    // Same rejection message whether the code is wrong or ACCESS_CODE is
    // unset: clients must not learn which it was.
    if !verify_access_code(&state.config, &form.code) {
        tracing::warn!(action = "login_failed", "Invalid access code submitted");
        return Err(AppError::Unauthorized("Code d'accès invalide".to_string()));
    }

    let jar = create_session(&state.config, jar)?;
    let destination = safe_redirect(&form.redirect).to_string();

    tracing::info!(action = "login_success", destination = %destination, "Session established");

    Ok((jar, Redirect::to(&destination)))
}

/// POST /deconnexion — Destroy the session
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = destroy_session(jar);

    tracing::info!(action = "logout", "Session destroyed");

    (jar, Redirect::to(LOGIN_PATH))
}
