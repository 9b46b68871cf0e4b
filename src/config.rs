use std::env;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct Config {
    /// Shared access code. `None` when ACCESS_CODE is unset or empty, in
    /// which case every verification fails closed.
    pub access_code: Option<String>,

    // Server
    pub bind_addr: SocketAddr,

    /// Set the Secure flag on the auth cookie (production deployments).
    pub secure_cookies: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_code",
                &self.access_code.as_ref().map(|_| "[REDACTED]"),
            )
            .field("bind_addr", &self.bind_addr)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        // (env vars may be set directly in production)
        let _ = dotenvy::dotenv();

        // Access code — optional at startup so the server can still serve
        // the login page, but every verification fails until it is set.
        // An empty value is treated as unset.
        let access_code = env::var("ACCESS_CODE").ok().filter(|c| !c.is_empty());
        if access_code.is_none() {
            tracing::warn!("ACCESS_CODE is not set; all logins will be rejected");
        }

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        let secure_cookies = parse_env_or_default("SECURE_COOKIES", false)?;

        Ok(Config {
            access_code,
            bind_addr,
            secure_cookies,
        })
    }
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
