use crate::core::config::StealthexConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{HttpTransport, RestClient, RestClientBuilder, RestClientConfig};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::types::Trade;
use super::{API_BASE_URL, EXCHANGE_NAME, TRADE_BASE_URL};

/// Thin typed wrapper around [`RestClient`] for the StealthEX API.
#[derive(Debug)]
pub struct StealthexClient {
    rest: RestClient,
}

impl StealthexClient {
    /// Create a client with the default transport and 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ExchangeError> {
        Self::from_config(StealthexConfig::new(api_key))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ExchangeError> {
        Self::from_config(StealthexConfig::new(api_key).timeout(timeout))
    }

    /// Create a client over a custom transport, e.g. a preconfigured reqwest
    /// client or a stub in tests.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ExchangeError> {
        Self::build(StealthexConfig::new(api_key), Some(transport))
    }

    /// Create a client from a full configuration, e.g. one loaded with
    /// [`StealthexConfig::from_env`].
    pub fn from_config(config: StealthexConfig) -> Result<Self, ExchangeError> {
        Self::build(config, None)
    }

    fn build(
        config: StealthexConfig,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> Result<Self, ExchangeError> {
        let StealthexConfig {
            api_key,
            timeout,
            debug,
        } = config;

        let rest_config = RestClientConfig::new(API_BASE_URL.to_string(), EXCHANGE_NAME.to_string())
            .with_timeout(timeout);
        let mut builder = RestClientBuilder::new(rest_config)
            .with_api_key(api_key)
            .with_debug(debug);
        if let Some(transport) = transport {
            builder = builder.with_transport(transport);
        }

        Ok(Self {
            rest: builder.build()?,
        })
    }

    /// Enable or disable full request/response dumping.
    pub fn set_debug(&self, enabled: bool) {
        self.rest.set_debug(enabled);
    }

    /// Fetch one trade by identifier, along with its metadata.
    ///
    /// Always unauthenticated; the trade-detail endpoint lives outside the
    /// generic API base.
    #[instrument(skip(self), fields(exchange = "stealthex", trade_id = %id))]
    pub async fn get_trade(&self, id: &str) -> Result<Trade, ExchangeError> {
        let resource = format!("{TRADE_BASE_URL}/{id}");
        let body = self
            .rest
            .execute(Method::GET, &resource, &[], false)
            .await?;

        // Well-formedness check before any field decoding.
        let _: serde_json::Value = serde_json::from_slice(&body)?;
        let trade = serde_json::from_slice(&body)?;
        Ok(trade)
    }
}
