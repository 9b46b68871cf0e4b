//! Timing-safe string comparison.

use subtle::ConstantTimeEq;

/// Compare two strings in constant time with respect to their content.
///
/// Differing lengths return false immediately: length alone is not treated
/// as secret (the access code's length is not what the comparison
/// protects). For equal-length inputs the comparison always walks the full
/// string, so response time does not reveal where the first mismatch is.
pub fn timing_safe_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}
