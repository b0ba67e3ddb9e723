//! StealthEX instant-exchange HTTP API client.
//!
//! Builds API requests with key-based authentication, bounds every call with
//! a timeout race, and decodes JSON responses into typed domain objects.
//!
//! ```rust,no_run
//! use stealthex::StealthexClient;
//!
//! # async fn example() -> Result<(), stealthex::ExchangeError> {
//! let client = StealthexClient::new("api-key")?;
//! let trade = client.get_trade("ab12cd34ef56").await?;
//! println!("{} -> {}: {}", trade.currency_from, trade.currency_to, trade.status);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod exchanges;

pub use crate::core::config::StealthexConfig;
pub use crate::core::errors::ExchangeError;
pub use crate::exchanges::stealthex::{StealthexClient, Trade};
