//! USD value of a token balance.

use crate::model::BalanceRecord;
use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;

/// Exact decimal quantity of `raw` smallest units at `decimals` scale.
///
/// `raw / 10^decimals` with no rounding.
pub fn to_decimal(raw: U256, decimals: u8) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<{ U256::BYTES }>());
    BigDecimal::new(digits, i64::from(decimals))
}

/// USD value of a balance, or `None` when any input is missing.
///
/// `usd = raw / 10^decimals * (usd_price * eth_rate)`
pub fn usd_value(
    record: Option<&BalanceRecord>,
    usd_price: Option<&BigDecimal>,
    decimals: u8,
) -> Option<BigDecimal> {
    let usd_price = usd_price?;
    let record = record?;
    let eth_rate = record.eth_rate.as_ref()?;
    let raw = record.raw_balance?;

    let usd_rate = usd_price * eth_rate;
    Some(to_decimal(raw, decimals) * usd_rate)
}
