//! Token derivation from the shared access code.

use sha2::{Digest, Sha256};

/// Length of a derived token: a SHA-256 digest rendered as lowercase hex.
pub const TOKEN_LEN: usize = 64;

/// Fixed non-secret suffix appended before hashing, so the token is bound
/// to this application and not a bare hash of the access code.
const TOKEN_DOMAIN: &str = "-lbb-tools-auth";

/// Derive the session token from the access code.
///
/// Deterministic: the same code always yields the same 64-character
/// lowercase-hex string. The token is safe to hand to the client — it
/// cannot be inverted back to the code.
pub fn derive_token(access_code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(access_code.as_bytes());
    hasher.update(TOKEN_DOMAIN.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check whether a string has the exact lexical shape of a derived token
/// (64 lowercase hex characters).
///
/// This is a format check only — it needs no access to the access code, so
/// the edge gatekeeper can call it. Cryptographic validity is decided by
/// [`crate::auth::verify::is_authenticated`].
pub fn is_token_format(value: &str) -> bool {
    value.len() == TOKEN_LEN
        && value
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
