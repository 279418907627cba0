//! # Token List Ranking
//!
//! Turns a [`MarketSnapshot`] into the ordered, display-ready rows of the token
//! picker.
//!
//! ## Pipeline
//!
//! ```text
//! MarketSnapshot → usd_value per token → compare_entries (stable sort)
//!                → formatted balance → SearchQuery filter → Vec<RankedEntry>
//! ```
//!
//! Every step is a pure function of its inputs. Missing balances, rates or a
//! missing USD price never produce an error, only absent display values.
//!
//! ## Example
//!
//! ```rust
//! use lib_core::model::MarketSnapshot;
//! use lib_core::ranking::{SearchQuery, TokenListRanker};
//!
//! let snapshot = MarketSnapshot::default();
//! let rows = TokenListRanker::new().rank_filtered(&snapshot, &SearchQuery::new("dai"));
//! assert!(rows.is_empty());
//! ```

pub mod filter;
pub mod format;
pub mod order;
pub mod usd;

pub use filter::{filter_entries, SearchQuery};
pub use format::{format_eth_balance, format_token_balance, format_usd};
pub use order::compare_entries;
pub use usd::usd_value;

use crate::model::{MarketSnapshot, TokenDetails};
use bigdecimal::BigDecimal;
use serde::Serialize;
use tracing::debug;

/// One row of the token picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub is_native: bool,

    /// Formatted balance; `None` while the balance is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_balance: Option<String>,

    /// USD value of the balance; `None` when balance, rate or price is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<BigDecimal>,
}

impl RankedEntry {
    /// Formatted USD value (`"<$0.01"`, `"$12.34"`), or `None`.
    pub fn display_usd(&self) -> Option<String> {
        format_usd(self.usd_value.as_ref())
    }
}

/// Ranks and filters the token list of a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenListRanker;

impl TokenListRanker {
    pub fn new() -> Self {
        Self
    }

    /// Build the entry for a single token.
    pub fn entry(&self, snapshot: &MarketSnapshot, token: &TokenDetails) -> RankedEntry {
        let record = snapshot.balance(&token.address);

        let display_balance = record.and_then(|r| {
            if token.is_native() {
                format_eth_balance(r.raw_balance)
            } else {
                format_token_balance(r.raw_balance, token.decimals)
            }
        });

        RankedEntry {
            address: token.address.clone(),
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            is_native: token.is_native(),
            display_balance,
            usd_value: usd_value(record, snapshot.usd_price.as_ref(), token.decimals),
        }
    }

    /// All tokens of the snapshot in display order.
    pub fn rank(&self, snapshot: &MarketSnapshot) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = snapshot
            .tokens
            .iter()
            .map(|token| self.entry(snapshot, token))
            .collect();

        // sort_by is stable: full ties keep provider order
        entries.sort_by(compare_entries);

        debug!(
            tokens = entries.len(),
            valued = entries.iter().filter(|e| e.usd_value.is_some()).count(),
            "Token list ranked"
        );

        entries
    }

    /// Ranked tokens matching `query`.
    pub fn rank_filtered(&self, snapshot: &MarketSnapshot, query: &SearchQuery) -> Vec<RankedEntry> {
        filter_entries(&self.rank(snapshot), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BalanceRecord;
    use alloy_primitives::U256;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn token(address: &str, symbol: &str, decimals: u8) -> TokenDetails {
        TokenDetails {
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: format!("{} Token", symbol),
            decimals,
        }
    }

    fn record(raw: &str, rate: Option<&str>) -> BalanceRecord {
        BalanceRecord::new(
            Some(U256::from_str_radix(raw, 10).unwrap()),
            rate.map(|r| BigDecimal::from_str(r).unwrap()),
        )
    }

    fn snapshot(price: Option<&str>) -> MarketSnapshot {
        let tokens = vec![
            token("0xb", "BAT", 18),
            token("0xm", "MKR", 18),
            token("ETH", "ETH", 18),
            token("0xu", "USDC", 6),
            token("0xz", "ZRX", 18),
        ];

        let mut balances = HashMap::new();
        // 2 ETH
        balances.insert("ETH".to_string(), record("2000000000000000000", Some("1")));
        // 100 USDC at 0.0005 ETH
        balances.insert("0xu".to_string(), record("100000000", Some("0.0005")));
        // 10 MKR at 0.5 ETH
        balances.insert("0xm".to_string(), record("10000000000000000000", Some("0.5")));
        // BAT balance known, rate unknown
        balances.insert("0xb".to_string(), record("0", None));

        MarketSnapshot::new(tokens, balances, price.map(|p| BigDecimal::from_str(p).unwrap()))
    }

    fn addresses(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.address.as_str()).collect()
    }

    #[test]
    fn test_rank_order() {
        let entries = TokenListRanker::new().rank(&snapshot(Some("2000")));
        // ETH ($4000) first, MKR ($10000), USDC ($100), then BAT/ZRX by symbol
        assert_eq!(addresses(&entries), vec!["ETH", "0xm", "0xu", "0xb", "0xz"]);
    }

    #[test]
    fn test_no_price_means_no_usd_anywhere() {
        let entries = TokenListRanker::new().rank(&snapshot(None));
        assert!(entries.iter().all(|e| e.usd_value.is_none()));
        // Without values only native-first and symbol order remain
        assert_eq!(addresses(&entries), vec!["ETH", "0xb", "0xm", "0xu", "0xz"]);
    }

    #[test]
    fn test_display_values() {
        let entries = TokenListRanker::new().rank(&snapshot(Some("2000")));
        let by_address = |a: &str| entries.iter().find(|e| e.address == a).unwrap();

        let eth = by_address("ETH");
        assert!(eth.is_native);
        assert_eq!(eth.display_balance.as_deref(), Some("2"));
        assert_eq!(eth.display_usd().as_deref(), Some("$4,000.00"));

        let usdc = by_address("0xu");
        assert_eq!(usdc.display_balance.as_deref(), Some("100"));
        assert_eq!(usdc.display_usd().as_deref(), Some("$100.00"));

        // Zero balance formats as "0"; no rate means no USD
        let bat = by_address("0xb");
        assert_eq!(bat.display_balance.as_deref(), Some("0"));
        assert_eq!(bat.display_usd(), None);

        // No balance record at all
        let zrx = by_address("0xz");
        assert_eq!(zrx.display_balance, None);
        assert_eq!(zrx.usd_value, None);
    }

    #[test]
    fn test_rank_filtered() {
        let rows = TokenListRanker::new().rank_filtered(&snapshot(Some("2000")), &SearchQuery::new("token"));
        assert_eq!(rows.len(), 5);

        let rows = TokenListRanker::new().rank_filtered(&snapshot(Some("2000")), &SearchQuery::new("zr"));
        assert_eq!(addresses(&rows), vec!["0xz"]);
    }
}
