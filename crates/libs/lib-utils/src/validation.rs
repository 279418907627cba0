//! # Validation Utilities
//!
//! Input validation helpers, including EVM address normalization.
//!
//! [`checksum_address`] mirrors what wallets do with a pasted address: accept
//! it with or without the `0x` prefix, in all-lowercase or all-uppercase, or
//! mixed case when the mixed case is a valid EIP-55 checksum, and return the
//! canonical checksummed form.

use alloy_primitives::Address;
use std::str::FromStr;

const ADDRESS_HEX_LEN: usize = 40;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// True if `input` has the shape of a 20-byte hex address (prefix optional).
///
/// Says nothing about the checksum; see [`checksum_address`].
pub fn is_address_like(input: &str) -> bool {
    let hex = strip_prefix(input);
    hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Normalize `input` to its EIP-55 checksummed form.
///
/// Returns `None` when the input is not address-shaped, or when it is mixed
/// case and the casing does not match the checksum.
///
/// # Examples
///
/// ```rust
/// use lib_utils::validation::checksum_address;
///
/// assert_eq!(
///     checksum_address("0x6b175474e89094c44da98b954eedeac495271d0f").as_deref(),
///     Some("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
/// );
/// assert_eq!(checksum_address("dai"), None);
/// ```
pub fn checksum_address(input: &str) -> Option<String> {
    if !is_address_like(input) {
        return None;
    }

    let hex = strip_prefix(input);
    let address = Address::from_str(hex).ok()?;
    let checksummed = address.to_checksum(None);

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && checksummed[2..] != *hex {
        return None;
    }

    Some(checksummed)
}

fn strip_prefix(input: &str) -> &str {
    input.strip_prefix("0x").unwrap_or(input)
}
