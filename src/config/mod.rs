//! Configuration handling for the application.
//!
//! Everything comes from environment variables with development defaults,
//! so the service boots with no setup. `Config::from_env` is the single
//! loading point; validation hooks can grow there later.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests and deploy tooling can
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_JWT_SECRET: &str = "mysecret";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    jwt_secret: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Load from environment variables, falling back to development
    /// defaults. Never fails today; future validation (address parsing,
    /// minimum secret length) can return a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let jwt_secret =
            env::var(ENV_JWT_SECRET).unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        Ok(Self {
            bind_addr,
            jwt_secret,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Secret used for signing/verifying JWTs.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
