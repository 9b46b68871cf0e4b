//! Protected page handlers.
//!
//! The edge gate has already screened the cookie's shape; each page still
//! runs the authoritative check before rendering, since only that check can
//! see the access code.

use crate::auth::middleware::{AppState, LOGIN_PATH};
use crate::auth::verify::is_authenticated;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

/// GET / — Redirect to the dashboard
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /dashboard — Landing page for the internal tools
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if !is_authenticated(&state.config, &jar) {
        return Redirect::to(&format!("{}?redirect=/dashboard", LOGIN_PATH)).into_response();
    }

    Html(
        r#"<!doctype html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Tableau de bord — LBB Tools</title>
  <link rel="stylesheet" href="/static/app.css">
</head>
<body>
  <main class="dashboard">
    <h1>Tableau de bord</h1>
    <nav>
      <a href="/paiements/nouveau-lien">Cr&eacute;er un lien de paiement</a>
    </nav>
    <form method="post" action="/deconnexion">
      <button type="submit">D&eacute;connexion</button>
    </form>
  </main>
</body>
</html>
"#,
    )
    .into_response()
}
