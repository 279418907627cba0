//! # Shared Utility Functions
//!
//! Common utility functions used by the picker crates.
//!
//! ## Address Formatting
//!
//! Functions for formatting token and wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x6B17...1d0F");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The address to format
/// * `prefix_len` - Number of characters to show at the start (default: 6, keeps the `0x`)
/// * `suffix_len` - Number of characters to show at the end (default: 4)
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
/// assert_eq!(format_address(addr, 6, 4), "0x6B17...1d0F");
/// assert_eq!(format_address(addr, 4, 6), "0x6B...271d0F");
/// assert_eq!(format_address("ETH", 6, 4), "ETH");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.len();
    let suffix_start = len.saturating_sub(suffix_len);

    // Token list entries are not guaranteed ASCII; never slice inside a char
    if len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(suffix_start)
    {
        return address.to_string();
    }

    format!("{}...{}", &address[..prefix_len], &address[suffix_start..])
}

/// Format an address with the default 6-character prefix and 4-character suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=6` and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
/// assert_eq!(truncate_address(addr), "0x6B17...1d0F");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(DAI, 6, 4), "0x6B17...1d0F");
        assert_eq!(format_address(DAI, 2, 2), "0x...0F");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("ETH", 6, 4), "ETH");
        assert_eq!(format_address("abcdefghij", 6, 4), "abcdefghij");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(DAI), "0x6B17...1d0F");
    }
}
