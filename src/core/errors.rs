use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Form encoding error: {0}")]
    FormError(#[from] serde_urlencoded::ser::Error),

    /// Non-2xx, non-401 response. Carries the HTTP status line only; the
    /// response body is discarded.
    #[error("API error: {status}")]
    ApiError { status: StatusCode },

    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Synthetic timeout raised by the request executor's own timer, not by
    /// the underlying transport.
    #[error("Request timed out after {0:?}")]
    TimeoutError(Duration),

    #[error("Request task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Other error: {0}")]
    Other(String),
}
