//! Session cookie lifecycle.
//!
//! The whole session is a single cookie holding the derived token. There is
//! no server-side session table: creating a session writes the cookie,
//! destroying it removes the cookie, and validity is re-checked against the
//! configured access code on every request that needs it.

use crate::auth::token::derive_token;
use crate::config::Config;
use crate::error::AppError;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the authentication cookie.
pub const AUTH_COOKIE_NAME: &str = "lbb-auth-token";

/// Cookie lifetime: 7 days.
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Create a session: derive the token from the configured access code and
/// add the auth cookie to the jar.
///
/// Errors if ACCESS_CODE is not configured — a session must never be
/// established without the secret that backs it.
pub fn create_session(config: &Config, jar: CookieJar) -> Result<CookieJar, AppError> {
    let access_code = config
        .access_code
        .as_deref()
        .ok_or_else(|| AppError::Internal("ACCESS_CODE is not configured".to_string()))?;

    let cookie = Cookie::build((AUTH_COOKIE_NAME, derive_token(access_code)))
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .path("/")
        .build();

    Ok(jar.add(cookie))
}

/// Remove the auth cookie. Idempotent: removing an absent cookie is a no-op
/// on the client, the removal Set-Cookie is sent either way.
pub fn destroy_session(jar: CookieJar) -> CookieJar {
    jar.remove(removal_cookie())
}

/// The cookie to send when deleting the credential. Path must match the
/// auth cookie's path for browsers to actually drop it.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

/// Current cookie value, if any.
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(AUTH_COOKIE_NAME).map(|c| c.value())
}
