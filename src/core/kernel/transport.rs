use crate::core::errors::ExchangeError;
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};

/// A fully-built HTTP request, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// Header name/value pairs, in send order.
    pub headers: Vec<(String, String)>,
    /// URL-encoded form body, when present.
    pub body: Option<String>,
}

/// An HTTP response with its body fully read into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Transport seam between the request executor and the network.
///
/// This trait provides a unified interface over the underlying HTTP stack so
/// the executor can be driven by the production reqwest client or by a stub
/// in tests. Implementations must be safe for concurrent use: the executor
/// runs each call on its own task against a shared transport.
///
/// A transport owns the full lifecycle of one exchange: it sends the request
/// and reads the body to completion before returning. When the executor's
/// timer wins the race and abandons a call, the transport task still runs to
/// completion and releases whatever it acquired on its own.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one HTTP exchange.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError>;
}

/// Production [`HttpTransport`] backed by a shared [`reqwest::Client`].
///
/// The inner client pools connections across calls; cloning this transport
/// shares the pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a fresh reqwest client.
    pub fn new() -> Result<Self, ExchangeError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ExchangeError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
