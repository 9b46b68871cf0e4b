//! Access-code authentication: token derivation, the session cookie, and
//! the two verification tiers (format-only edge gate, secret-aware
//! authoritative check).

pub mod compare;
pub mod middleware;
pub mod session;
pub mod token;
pub mod verify;

pub use middleware::{access_gate, AppState, LOGIN_PATH};
pub use session::AUTH_COOKIE_NAME;
pub use verify::{is_authenticated, verify_access_code};
