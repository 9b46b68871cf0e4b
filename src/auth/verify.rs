//! Authoritative verification against the configured access code.
//!
//! Two checks live here, and they are deliberately asymmetric:
//!
//! - at login time the submitted code is compared to the RAW access code
//!   (the server has the secret itself, nothing to hash);
//! - at session time the cookie is compared to the DERIVED token (the
//!   cookie only ever holds the hash, never the code).
//!
//! Both fail closed when ACCESS_CODE is not configured.

use crate::auth::compare::timing_safe_eq;
use crate::auth::session::session_token;
use crate::auth::token::derive_token;
use crate::config::Config;
use axum_extra::extract::cookie::CookieJar;

/// Check a submitted login code against the configured access code.
///
/// Returns false when ACCESS_CODE is not configured, logging a diagnostic
/// for operators; the caller surfaces the same "invalid code" message either
/// way so clients cannot probe server configuration.
pub fn verify_access_code(config: &Config, code: &str) -> bool {
    let Some(expected) = config.access_code.as_deref() else {
        tracing::error!("ACCESS_CODE is not configured; rejecting login attempt");
        return false;
    };

    timing_safe_eq(code, expected)
}

/// Check whether the request's session cookie holds the token derived from
/// the currently configured access code.
pub fn is_authenticated(config: &Config, jar: &CookieJar) -> bool {
    let Some(access_code) = config.access_code.as_deref() else {
        tracing::error!("ACCESS_CODE is not configured; treating all sessions as invalid");
        return false;
    };

    let Some(token) = session_token(jar) else {
        return false;
    };

    timing_safe_eq(token, &derive_token(access_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::AUTH_COOKIE_NAME;
    use axum_extra::extract::cookie::Cookie;

    fn test_config(access_code: Option<&str>) -> Config {
        Config {
            access_code: access_code.map(String::from),
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            secure_cookies: false,
        }
    }

    fn jar_with_token(token: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(AUTH_COOKIE_NAME, token.to_string()))
    }

    #[test]
    fn test_verify_access_code() {
        let config = test_config(Some("abc123"));
        assert!(verify_access_code(&config, "abc123"));
        assert!(!verify_access_code(&config, "wrong"));
        assert!(!verify_access_code(&config, ""));
        // Same length as the real code, still wrong
        assert!(!verify_access_code(&config, "abc124"));
    }

    #[test]
    fn test_verify_access_code_fails_closed_without_secret() {
        let config = test_config(None);
        assert!(!verify_access_code(&config, "abc123"));
        assert!(!verify_access_code(&config, ""));
    }

    #[test]
    fn test_is_authenticated_with_matching_token() {
        let config = test_config(Some("abc123"));
        let jar = jar_with_token(&derive_token("abc123"));
        assert!(is_authenticated(&config, &jar));
    }

    #[test]
    fn test_is_authenticated_rejects_other_secrets_token() {
        let config = test_config(Some("abc123"));
        let jar = jar_with_token(&derive_token("other-code"));
        assert!(!is_authenticated(&config, &jar));
    }

    #[test]
    fn test_is_authenticated_rejects_raw_code_as_token() {
        // Storing the raw code in the cookie must never authenticate
        let config = test_config(Some("abc123"));
        let jar = jar_with_token("abc123");
        assert!(!is_authenticated(&config, &jar));
    }

    #[test]
    fn test_is_authenticated_without_cookie() {
        let config = test_config(Some("abc123"));
        assert!(!is_authenticated(&config, &CookieJar::new()));
    }

    #[test]
    fn test_is_authenticated_fails_closed_without_secret() {
        let config = test_config(None);
        // Even a well-formed token is rejected when no secret is configured
        let jar = jar_with_token(&derive_token("abc123"));
        assert!(!is_authenticated(&config, &jar));
    }
}
