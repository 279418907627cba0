//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the token picker and the
//! providers that feed it (token metadata, balances, prices).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Token metadata, balance records and market snapshots
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten addresses for display
//!   - **[`utils::truncate_address`]**: Shorten addresses with the default widths
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Amounts are decimal strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::token::MarketSnapshotDto;
//!
//! let snapshot: MarketSnapshotDto = serde_json::from_str(r#"{"tokens": []}"#).unwrap();
//! assert!(snapshot.usd_price.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
