//! # EVM Library
//!
//! Wallet context, ERC-20 allowance approval and transaction tracking.
//!
//! The node and signer are external. This crate prepares calls, applies the
//! gas margin and records what was submitted.

pub mod approval;
pub mod client;
pub mod context;
pub mod contract;
pub mod error;
pub mod gas;
pub mod tracker;

pub use approval::{ApprovalService, SkipReason, UnlockOutcome};
pub use client::ContractClient;
pub use context::{ExchangeAddresses, WalletContext};
pub use contract::{unlimited_approval, PreparedCall};
pub use error::ChainError;
pub use gas::calculate_gas_margin;
pub use tracker::{ApprovalFailure, InMemoryTracker, TransactionMeta, TransactionRecord, TransactionTracker};
