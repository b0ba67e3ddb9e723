use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Wire layout of the `timestamp` field: UTC with up to three fractional
/// digits and a literal `Z`, e.g. `2021-05-01T12:30:00.123Z`. A layout change
/// upstream must fail the decode rather than produce a wrong instant.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// One exchange transaction as returned by the trade-detail endpoint.
///
/// Amounts arrive as quoted strings and are decoded into [`Decimal`] to keep
/// their exact precision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    pub id: String,
    /// Exchange type, e.g. `"fixed"` or `"floating"`.
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub currency_from: String,
    pub currency_to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub expected_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to: Decimal,
    pub address_from: String,
    pub address_to: String,
    /// Extra identifier (memo/tag) for the source chain, when it needs one.
    #[serde(default)]
    pub extra_id_from: Option<String>,
    #[serde(default)]
    pub extra_id_to: Option<String>,
    #[serde(default)]
    pub tx_from: String,
    #[serde(default)]
    pub tx_to: String,
    pub status: String,
    #[serde(default)]
    pub refund_address: Option<String>,
    #[serde(default)]
    pub refund_extra_id: Option<String>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
