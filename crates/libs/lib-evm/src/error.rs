//! Errors raised by chain collaborators.

use thiserror::Error;

/// Failures of the approval chain.
///
/// None of these are returned synchronously to the panel; they are reported
/// through the transaction tracker's failure channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The node could not estimate gas; nothing was submitted.
    #[error("Gas estimation failed: {0}")]
    GasEstimation(String),

    /// The wallet or node rejected the transaction.
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// No exchange contract is configured for this network.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(u64),

    /// No wallet is connected.
    #[error("Wallet disconnected")]
    Disconnected,

    /// The token identifier is not a contract address.
    #[error("Invalid token address: {0}")]
    InvalidToken(String),
}

