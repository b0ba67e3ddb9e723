use crate::core::config::DEFAULT_TIMEOUT;
use crate::core::errors::ExchangeError;
use crate::core::kernel::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use reqwest::{Method, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL joined with relative resources. Absolute resources bypass it.
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Wall-clock bound on one request, transport call included.
    pub timeout: Duration,
}

impl RestClientConfig {
    /// Create a new configuration with the default 30 second timeout.
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout. A zero duration falls back to the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    api_key: Option<Secret<String>>,
    transport: Option<Arc<dyn HttpTransport>>,
    debug: bool,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            api_key: None,
            transport: None,
            debug: false,
        }
    }

    /// Set the API key injected into authenticated requests.
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Inject a custom transport instead of the default reqwest one.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the initial state of the request/response dump flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the REST client, creating a [`ReqwestTransport`] when no custom
    /// transport was injected.
    pub fn build(self) -> Result<RestClient, ExchangeError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(RestClient {
            transport,
            config: self.config,
            api_key: self
                .api_key
                .unwrap_or_else(|| Secret::new(String::new())),
            debug: AtomicBool::new(self.debug),
        })
    }
}

/// Request executor for the exchange REST API.
///
/// Resolves resource paths against the configured base URL, injects the API
/// key on authenticated calls, encodes parameters according to the HTTP
/// method, and races every transport call against the configured timeout.
/// The transport is shared across calls; everything else is immutable after
/// construction except the dump flag.
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    config: RestClientConfig,
    api_key: Secret<String>,
    debug: AtomicBool,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Enable or disable full request/response dumping.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Resolve a resource against the base URL. Anything that already starts
    /// with an HTTP scheme marker is taken verbatim.
    fn resolve_url(&self, resource: &str) -> Result<Url, ExchangeError> {
        let raw = if resource.starts_with("http") {
            resource.to_owned()
        } else {
            format!("{}/{}", self.config.base_url, resource)
        };
        Ok(Url::parse(&raw)?)
    }

    /// Execute one API call and return the raw response body.
    ///
    /// GET merges `params` into the query string; any other method sends them
    /// as a URL-encoded form body, leaving only the API key in the query.
    /// A 401 response is passed through with its body and no error: the
    /// upstream API has been seen returning it alongside a valid payload, so
    /// callers must judge the content themselves. Any other non-2xx status
    /// becomes [`ExchangeError::ApiError`] and the body is discarded.
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, resource = %resource))]
    pub async fn execute(
        &self,
        method: Method,
        resource: &str,
        params: &[(&str, &str)],
        auth_required: bool,
    ) -> Result<Vec<u8>, ExchangeError> {
        let mut url = self.resolve_url(resource)?;

        if auth_required {
            let key = self.api_key.expose_secret();
            if key.is_empty() {
                return Err(ExchangeError::AuthError(
                    "You need to set API Key to call this method".to_string(),
                ));
            }
            url.query_pairs_mut().append_pair("api_key", key);
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        let body = if method == Method::GET {
            for (key, value) in params {
                url.query_pairs_mut().append_pair(key, value);
            }
            None
        } else {
            let form = serde_urlencoded::to_string(params)?;
            if form.is_empty() {
                None
            } else {
                headers.push((
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ));
                Some(form)
            }
        };

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let response = self.race_transport(request).await?;
        trace!(status = %response.status, bytes = response.body.len(), "response received");

        if response.status.is_success() || response.status == StatusCode::UNAUTHORIZED {
            Ok(response.body)
        } else {
            Err(ExchangeError::ApiError {
                status: response.status,
            })
        }
    }

    /// Race one transport call against the configured timeout.
    ///
    /// The call runs on its own task so the timer keeps ticking regardless of
    /// transport progress. When the timer fires first the task is detached,
    /// never cancelled: its eventual result is dropped and the transport
    /// releases its own resources when it finishes.
    async fn race_transport(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError> {
        let timeout = self.config.timeout;
        let debug = self.debug.load(Ordering::Relaxed);
        let transport = Arc::clone(&self.transport);

        let handle = tokio::spawn(async move {
            if debug {
                dump_request(&request);
            }
            let result = transport.send(request).await;
            if debug {
                dump_result(&result);
            }
            result
        });

        tokio::select! {
            joined = handle => joined?,
            () = tokio::time::sleep(timeout) => Err(ExchangeError::TimeoutError(timeout)),
        }
    }
}

fn dump_request(request: &HttpRequest) {
    debug!(
        target: "stealthex::dump",
        method = %request.method,
        url = %request.url,
        headers = ?request.headers,
        body = request.body.as_deref().unwrap_or(""),
        "outgoing request"
    );
}

fn dump_result(result: &Result<HttpResponse, ExchangeError>) {
    match result {
        Ok(response) => debug!(
            target: "stealthex::dump",
            status = %response.status,
            headers = ?response.headers,
            body = %String::from_utf8_lossy(&response.body),
            "incoming response"
        ),
        Err(error) => debug!(target: "stealthex::dump", error = %error, "request failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RestClient {
        let config = RestClientConfig::new(
            "https://api.stealthex.io/api/v2".to_string(),
            "stealthex".to_string(),
        );
        RestClientBuilder::new(config)
            .build()
            .expect("client should build")
    }

    #[test]
    fn relative_resource_joins_base_url() {
        let client = test_client();
        let url = client.resolve_url("exchange/abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.stealthex.io/api/v2/exchange/abc123"
        );
    }

    #[test]
    fn absolute_resource_bypasses_base_url() {
        let client = test_client();
        let url = client
            .resolve_url("https://stealthex.io/api/exchange/abc123")
            .unwrap();
        assert_eq!(url.as_str(), "https://stealthex.io/api/exchange/abc123");
    }

    #[test]
    fn malformed_resource_is_a_url_error() {
        let config = RestClientConfig::new("not a url".to_string(), "stealthex".to_string());
        let client = RestClientBuilder::new(config).build().unwrap();
        let err = client.resolve_url("whatever").unwrap_err();
        assert!(matches!(err, ExchangeError::UrlError(_)));
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let config = RestClientConfig::new(String::new(), String::new())
            .with_timeout(Duration::ZERO);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
