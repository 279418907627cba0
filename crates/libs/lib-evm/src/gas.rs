//! Gas limit safety margin.

use alloy_primitives::U256;

/// Basis points denominator (100% = 10,000).
const BPS_DENOMINATOR: u64 = 10_000;

/// Add `margin_bps` basis points to a gas estimate.
///
/// `estimate + estimate * margin_bps / 10_000`, saturating at `U256::MAX`.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use lib_evm::gas::calculate_gas_margin;
///
/// assert_eq!(calculate_gas_margin(U256::from(46_000u64), 1000), U256::from(50_600u64));
/// ```
pub fn calculate_gas_margin(estimate: U256, margin_bps: u32) -> U256 {
    let offset = estimate.saturating_mul(U256::from(margin_bps)) / U256::from(BPS_DENOMINATOR);
    estimate.saturating_add(offset)
}
