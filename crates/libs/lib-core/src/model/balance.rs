//! Per-token balance record.

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use shared::dto::token::BalanceEntry;
use std::str::FromStr;
use tracing::warn;

/// Raw balance and native-asset exchange rate for one token.
///
/// A `None` field means the provider has not reported it (or reported
/// something unusable such as `NaN`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceRecord {
    pub raw_balance: Option<U256>,
    pub eth_rate: Option<BigDecimal>,
}

impl BalanceRecord {
    pub fn new(raw_balance: Option<U256>, eth_rate: Option<BigDecimal>) -> Self {
        Self {
            raw_balance,
            eth_rate,
        }
    }

    /// Parse a wire entry; `address` is only used for log context.
    pub fn from_entry(address: &str, entry: &BalanceEntry) -> Self {
        let raw_balance = entry.balance.as_deref().and_then(|raw| {
            parse_raw_balance(raw).or_else(|| {
                warn!(token = %address, balance = %raw, "Unparsable raw balance, treating as absent");
                None
            })
        });

        let eth_rate = entry.eth_rate.as_deref().and_then(|raw| {
            parse_rate(raw).or_else(|| {
                warn!(token = %address, eth_rate = %raw, "Unusable exchange rate, treating as absent");
                None
            })
        });

        Self {
            raw_balance,
            eth_rate,
        }
    }
}

/// Parse a base-10 integer amount in the token's smallest unit.
pub fn parse_raw_balance(raw: &str) -> Option<U256> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    U256::from_str_radix(raw, 10).ok()
}

/// Parse a decimal rate. `NaN`, infinities and other non-numbers yield `None`.
pub fn parse_rate(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_balance() {
        assert_eq!(parse_raw_balance("0"), Some(U256::ZERO));
        assert_eq!(
            parse_raw_balance("1500000000000000000"),
            Some(U256::from(1_500_000_000_000_000_000u128))
        );
        assert_eq!(parse_raw_balance(""), None);
        assert_eq!(parse_raw_balance("-5"), None);
        assert_eq!(parse_raw_balance("1.5"), None);
    }

    #[test]
    fn test_parse_rate_rejects_nan() {
        assert_eq!(parse_rate("NaN"), None);
        assert_eq!(parse_rate("Infinity"), None);
        assert_eq!(parse_rate("0.000542"), BigDecimal::from_str("0.000542").ok());
    }

    #[test]
    fn test_from_entry_keeps_good_fields() {
        let entry = BalanceEntry {
            balance: Some("42".to_string()),
            eth_rate: Some("NaN".to_string()),
        };
        let record = BalanceRecord::from_entry("0xabc", &entry);
        assert_eq!(record.raw_balance, Some(U256::from(42u64)));
        assert_eq!(record.eth_rate, None);
    }
}
