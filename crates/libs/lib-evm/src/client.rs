//! Contract client seam.
//!
//! The node and the wallet signer live outside this workspace. They are reached
//! through [`ContractClient`], which tests replace with in-memory mocks.

use crate::contract::PreparedCall;
use crate::error::ChainError;
use alloy_primitives::{TxHash, U256};
use async_trait::async_trait;

/// Gas estimation and transaction submission for prepared calls.
#[async_trait]
pub trait ContractClient: Send + Sync {
    /// Estimate gas for `call` sent from the connected account.
    async fn estimate_gas(&self, call: &PreparedCall) -> Result<U256, ChainError>;

    /// Sign and broadcast `call` with an explicit gas limit.
    async fn send(&self, call: &PreparedCall, gas_limit: U256) -> Result<TxHash, ChainError>;
}
