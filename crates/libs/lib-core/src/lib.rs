//! # Core Library
//!
//! Configuration, error handling, the market snapshot model and the token
//! list ranking used by the picker.

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod ranking;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use feed::SnapshotFeed;
pub use model::{BalanceRecord, MarketSnapshot, TokenDetails, NATIVE_ASSET};
pub use ranking::{RankedEntry, SearchQuery, TokenListRanker};
