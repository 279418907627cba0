//! # Market Model
//!
//! Typed, arbitrary-precision views over the provider DTOs in [`shared::dto::token`].
//!
//! Parsing here never fails: a balance or rate that cannot be parsed is logged
//! and treated as absent, which the ranker renders as a placeholder.

pub mod balance;
pub mod snapshot;

pub use balance::BalanceRecord;
pub use snapshot::MarketSnapshot;
pub use shared::dto::token::{TokenDetails, NATIVE_ASSET};
