pub mod client;
pub mod types;

// Re-export main types for easier importing
pub use client::StealthexClient;
pub use types::Trade;

/// StealthEX API endpoint for relative resources.
pub const API_BASE_URL: &str = "https://api.stealthex.io/api/v2";

/// Trade details are served by the site API, not the generic v2 base.
pub(crate) const TRADE_BASE_URL: &str = "https://stealthex.io/api/exchange";

pub(crate) const EXCHANGE_NAME: &str = "stealthex";
