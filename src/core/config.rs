use secrecy::{ExposeSecret, Secret};
use std::env;
use std::time::Duration;

/// Default request timeout applied when none is configured (or when a
/// configured value is not strictly positive).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration for the StealthEX API.
///
/// The API key is held in a [`Secret`] so it never leaks through `Debug`
/// output. Everything here is fixed once the client is built, except the
/// debug flag which stays togglable at runtime.
#[derive(Debug, Clone)]
pub struct StealthexConfig {
    pub api_key: Secret<String>,
    pub timeout: Duration,
    pub debug: bool,
}

impl StealthexConfig {
    /// Create a new configuration with the given API key.
    ///
    /// An empty key is allowed; only calls that require authentication will
    /// fail with it.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `STEALTHEX_API_KEY`
    /// - `STEALTHEX_TIMEOUT_SECS` (optional, defaults to 30)
    /// - `STEALTHEX_DEBUG` (optional, defaults to false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("STEALTHEX_API_KEY")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("STEALTHEX_API_KEY".into()))?;

        let timeout = env::var("STEALTHEX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        let debug = env::var("STEALTHEX_DEBUG")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Ok(Self {
            api_key: Secret::new(api_key),
            timeout,
            debug,
        })
    }

    /// Set the request timeout. A zero duration falls back to the default.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        self
    }

    /// Enable or disable request/response dumping.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Check whether an API key is present for authenticated operations.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Get the API key (use carefully - exposes the secret).
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
