//! # Display Formatting
//!
//! Balance and USD strings for token picker rows.
//!
//! ## Balances
//!
//! - [`format_amount`] - Raw integer amount to a short decimal string
//! - [`format_token_balance`] - Contract tokens, up to 4 decimal places
//! - [`format_eth_balance`] - Native asset, 6 decimal places
//!
//! Amounts below the smallest displayable step render as a less-than marker
//! (`"<0.0001"`), zero renders as `"0"`, and everything else is rounded half-up
//! with trailing zeros dropped and the whole part comma-grouped.
//!
//! ## USD
//!
//! - [`format_usd`] - `"<$0.01"` below one cent, otherwise `"$1,234.50"`

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, RoundingMode};
use tracing::warn;

/// Decimals of the native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Decimal places shown for the native asset balance.
pub const NATIVE_DISPLAY_DECIMALS: u8 = 6;

/// Maximum decimal places shown for contract token balances.
pub const TOKEN_DISPLAY_DECIMALS: u8 = 4;

/// Marker rendered for non-zero USD values under one cent.
pub const LESS_THAN_CENT: &str = "<$0.01";

/// Largest exponent for which `10^n` fits in a `U256`.
const MAX_BASE_DECIMALS: u8 = 77;

/// Format a raw integer amount with `base_decimals` implied decimal places,
/// showing at most `display_decimals` of them.
///
/// Returns `None` if `base_decimals` is too large to scale in 256 bits.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use lib_core::ranking::format::format_amount;
///
/// let raw = U256::from(1_234_567_891_000_000_000_000u128);
/// assert_eq!(format_amount(raw, 18, 4).as_deref(), Some("1,234.5679"));
/// assert_eq!(format_amount(U256::ZERO, 18, 4).as_deref(), Some("0"));
/// assert_eq!(format_amount(U256::from(1u8), 18, 4).as_deref(), Some("<0.0001"));
/// ```
pub fn format_amount(raw: U256, base_decimals: u8, display_decimals: u8) -> Option<String> {
    if base_decimals > MAX_BASE_DECIMALS {
        warn!(base_decimals, "Token decimals too large to format");
        return None;
    }

    if raw.is_zero() {
        return Some("0".to_string());
    }

    let display_decimals = display_decimals.min(base_decimals);
    let step = pow10(base_decimals - display_decimals);

    if raw < step {
        return Some(less_than_marker(display_decimals));
    }

    // Round half-up to the display step; saturating at the top of the range
    let half = step / U256::from(2u8);
    let rounded = raw.checked_add(half).unwrap_or(raw);
    let steps = rounded / step;

    let display_unit = pow10(display_decimals);
    let whole = group_thousands(&(steps / display_unit).to_string());

    if display_decimals == 0 {
        return Some(whole);
    }

    let fraction = format!(
        "{:0>width$}",
        (steps % display_unit).to_string(),
        width = usize::from(display_decimals)
    );
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        Some(whole)
    } else {
        Some(format!("{}.{}", whole, fraction))
    }
}

/// Format a contract token balance, or `None` when the balance is unknown.
pub fn format_token_balance(raw: Option<U256>, decimals: u8) -> Option<String> {
    format_amount(raw?, decimals, TOKEN_DISPLAY_DECIMALS.min(decimals))
}

/// Format a native asset balance, or `None` when the balance is unknown.
pub fn format_eth_balance(raw: Option<U256>) -> Option<String> {
    format_amount(raw?, NATIVE_DECIMALS, NATIVE_DISPLAY_DECIMALS)
}

/// Format a USD value for display, or `None` when the value is unknown.
///
/// # Examples
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use lib_core::ranking::format::format_usd;
/// use std::str::FromStr;
///
/// let value = BigDecimal::from_str("1234567.891").unwrap();
/// assert_eq!(format_usd(Some(&value)).as_deref(), Some("$1,234,567.89"));
/// assert_eq!(format_usd(None), None);
/// ```
pub fn format_usd(value: Option<&BigDecimal>) -> Option<String> {
    let value = value?;

    let one_cent = BigDecimal::new(1.into(), 2);
    if *value < one_cent {
        return Some(LESS_THAN_CENT.to_string());
    }

    let rounded = value.with_scale_round(2, RoundingMode::HalfUp).to_plain_string();
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    Some(format!("${}.{}", group_thousands(whole), cents))
}

/// Insert comma separators every three digits (e.g., `"1234567"` -> `"1,234,567"`).
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn less_than_marker(display_decimals: u8) -> String {
    if display_decimals == 0 {
        "<1".to_string()
    } else {
        format!("<0.{}1", "0".repeat(usize::from(display_decimals) - 1))
    }
}

fn pow10(exp: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn wei(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_balance_is_zero() {
        assert_eq!(format_token_balance(Some(U256::ZERO), 18).as_deref(), Some("0"));
        assert_eq!(format_eth_balance(Some(U256::ZERO)).as_deref(), Some("0"));
    }

    #[test]
    fn test_absent_balance_is_absent() {
        assert_eq!(format_token_balance(None, 18), None);
        assert_eq!(format_eth_balance(None), None);
    }

    #[test]
    fn test_less_than_marker() {
        assert_eq!(format_token_balance(Some(wei("99999999999999")), 18).as_deref(), Some("<0.0001"));
        assert_eq!(format_eth_balance(Some(wei("999999999999"))).as_deref(), Some("<0.000001"));
    }

    #[test]
    fn test_rounding_half_up() {
        // 1.23455 -> 1.2346, 1.23454 -> 1.2345
        assert_eq!(format_token_balance(Some(wei("1234550000000000000")), 18).as_deref(), Some("1.2346"));
        assert_eq!(format_token_balance(Some(wei("1234540000000000000")), 18).as_deref(), Some("1.2345"));
    }

    #[test]
    fn test_rounding_carries_into_whole_part() {
        // 0.99996 rounds up to 1, not "0."
        assert_eq!(format_token_balance(Some(wei("999960000000000000")), 18).as_deref(), Some("1"));
        assert_eq!(format_token_balance(Some(wei("999999999999999999999")), 18).as_deref(), Some("1,000"));
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(format_eth_balance(Some(wei("1500000000000000000"))).as_deref(), Some("1.5"));
        assert_eq!(format_eth_balance(Some(wei("2000000000000000000"))).as_deref(), Some("2"));
    }

    #[test]
    fn test_small_decimal_tokens() {
        // USDC-style 6 decimals
        assert_eq!(format_token_balance(Some(wei("12345678")), 6).as_deref(), Some("12.3457"));
        // 2 decimals shows at most 2 places
        assert_eq!(format_token_balance(Some(wei("12345")), 2).as_deref(), Some("123.45"));
        // 0 decimals
        assert_eq!(format_token_balance(Some(wei("1234567")), 0).as_deref(), Some("1,234,567"));
    }

    #[test]
    fn test_oversized_decimals_fail_closed() {
        assert_eq!(format_token_balance(Some(wei("1")), 78), None);
        assert!(format_token_balance(Some(wei("1")), 77).is_some());
    }

    #[test]
    fn test_usd_boundaries() {
        assert_eq!(format_usd(Some(&dec("0.009999"))).as_deref(), Some(LESS_THAN_CENT));
        assert_eq!(format_usd(Some(&dec("0"))).as_deref(), Some(LESS_THAN_CENT));
        assert_eq!(format_usd(Some(&dec("0.01"))).as_deref(), Some("$0.01"));
        assert_eq!(format_usd(Some(&dec("0.015"))).as_deref(), Some("$0.02"));
    }

    #[test]
    fn test_usd_grouping_and_padding() {
        assert_eq!(format_usd(Some(&dec("1234.5"))).as_deref(), Some("$1,234.50"));
        assert_eq!(format_usd(Some(&dec("999999.999"))).as_deref(), Some("$1,000,000.00"));
        assert_eq!(format_usd(Some(&dec("25"))).as_deref(), Some("$25.00"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
