//! # Token Data Transfer Objects
//!
//! Token metadata, per-token balance records and the market snapshot that
//! bundles them with the native asset's USD price.
//!
//! ## Overview
//!
//! These are the shapes the metadata, balance and price providers hand to the
//! picker. Amounts stay as strings on the wire; `lib-core` parses them into
//! arbitrary-precision types and treats anything unparsable as missing data.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "balance": "25000000000000000000",
//!   "eth_rate": 0.000542
//! }
//! ```
//!
//! `eth_rate` accepts either a JSON string or a JSON number. `"NaN"` is kept
//! verbatim and resolved to "no rate" downstream.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Address sentinel used for the chain's native asset.
pub const NATIVE_ASSET: &str = "ETH";

/// Static metadata for one token.
///
/// `address` is either [`NATIVE_ASSET`] or a `0x`-prefixed contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

impl TokenDetails {
    /// True when this entry stands for the native asset rather than a contract.
    pub fn is_native(&self) -> bool {
        self.address == NATIVE_ASSET
    }
}

/// Balance and exchange rate for one token, as reported by the balance provider.
///
/// Either field may be missing while the provider is still loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Raw integer balance in the token's smallest unit, base 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,

    /// Price of one whole token denominated in the native asset.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_rate"
    )]
    pub eth_rate: Option<String>,
}

/// Everything the ranker needs for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshotDto {
    /// Native asset price in USD; absent when no price feed is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<String>,

    /// Known tokens, in provider order.
    #[serde(default)]
    pub tokens: Vec<TokenDetails>,

    /// Balance records keyed by token address.
    #[serde(default)]
    pub balances: HashMap<String, BalanceEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RateValue {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_rate<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RateValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        RateValue::Text(s) => s,
        RateValue::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eth_rate_accepts_number_and_string() {
        let entry: BalanceEntry =
            serde_json::from_str(r#"{"balance":"10","eth_rate":0.5}"#).unwrap();
        assert_eq!(entry.eth_rate.as_deref(), Some("0.5"));

        let entry: BalanceEntry =
            serde_json::from_str(r#"{"balance":"10","eth_rate":"NaN"}"#).unwrap();
        assert_eq!(entry.eth_rate.as_deref(), Some("NaN"));
    }

    #[test]
    fn test_partial_entry() {
        let entry: BalanceEntry = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(entry, BalanceEntry::default());

        let entry: BalanceEntry = serde_json::from_str(r#"{"eth_rate":null}"#).unwrap();
        assert!(entry.eth_rate.is_none());
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot: MarketSnapshotDto = serde_json::from_str("{}").unwrap();
        assert!(snapshot.usd_price.is_none());
        assert!(snapshot.tokens.is_empty());
        assert!(snapshot.balances.is_empty());
    }

    #[test]
    fn test_is_native() {
        let eth = TokenDetails {
            address: NATIVE_ASSET.to_string(),
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            decimals: 18,
        };
        assert!(eth.is_native());
    }
}
