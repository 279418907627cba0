//! # Data Transfer Objects (DTOs)
//!
//! Wire structures for the data the token picker consumes from its providers.
//!
//! ## Module Organization
//!
//! - [`token`] - Token metadata, balance records and market snapshots
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: Carried as decimal strings so no precision is lost in transit
//!
//! ## Example Snapshot
//!
//! ```text
//! {
//!   "usd_price": "1843.12",
//!   "tokens": [
//!     { "address": "ETH", "symbol": "ETH", "name": "Ethereum", "decimals": 18 },
//!     { "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "symbol": "DAI", "name": "Dai Stablecoin", "decimals": 18 }
//!   ],
//!   "balances": {
//!     "ETH": { "balance": "1500000000000000000", "eth_rate": "1" },
//!     "0x6B175474E89094C44Da98b954EedeAC495271d0F": { "balance": "25000000000000000000", "eth_rate": "0.000542" }
//!   }
//! }
//! ```

pub mod token;

pub use token::*;
