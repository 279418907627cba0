//! # Allowance Approval
//!
//! Unlocks an ERC-20 token for the exchange contract.
//!
//! ## Flow
//!
//! ```text
//! unlock(ctx, token)
//!   ├─ native / empty / pending ──> Skipped
//!   └─ spawn ──> estimate_gas ──> +margin ──> send ──> tracker.add_transaction
//!                     │                         │
//!                     └──────── failure ────────┴──> tracker.report_failure
//! ```
//!
//! The spawned chain is detached. Dropping the caller does not cancel it and
//! its outcome is only visible through the [`TransactionTracker`].

use crate::client::ContractClient;
use crate::context::{ExchangeAddresses, WalletContext};
use crate::contract::{unlimited_approval, PreparedCall};
use crate::error::ChainError;
use crate::gas::calculate_gas_margin;
use crate::tracker::{ApprovalFailure, TransactionMeta, TransactionTracker};
use alloy_primitives::{Address, TxHash};
use lib_core::{Config, NATIVE_ASSET};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// Why an unlock request did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The native asset needs no allowance.
    NativeAsset,
    EmptySelection,
    /// An approval for this token is already in flight.
    AlreadyPending,
    Disconnected,
    UnsupportedNetwork(u64),
    InvalidToken,
}

/// Result of [`ApprovalService::unlock`].
#[derive(Debug)]
pub enum UnlockOutcome {
    /// The approval chain is running in the background.
    Started(JoinHandle<()>),
    Skipped(SkipReason),
}

impl UnlockOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, UnlockOutcome::Started(_))
    }
}

/// Starts and runs approval transactions.
#[derive(Clone)]
pub struct ApprovalService {
    inner: Arc<Inner>,
    runtime: Handle,
}

struct Inner {
    client: Arc<dyn ContractClient>,
    tracker: Arc<dyn TransactionTracker>,
    exchanges: ExchangeAddresses,
    gas_margin_bps: u32,
    /// Tokens with a chain spawned but not yet recorded by the tracker.
    in_flight: Mutex<HashSet<String>>,
}

/// Removes a token from the in-flight set when the chain ends, panics included.
struct InFlightGuard {
    inner: Arc<Inner>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.inner.in_flight.lock().remove(&self.key);
    }
}

impl ApprovalService {
    pub fn new(
        client: Arc<dyn ContractClient>,
        tracker: Arc<dyn TransactionTracker>,
        exchanges: ExchangeAddresses,
        gas_margin_bps: u32,
        runtime: Handle,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                tracker,
                exchanges,
                gas_margin_bps,
                in_flight: Mutex::new(HashSet::new()),
            }),
            runtime,
        }
    }

    /// Build the service from configuration: spender table from
    /// `PICKER_EXCHANGE_ADDRESSES`, margin from `PICKER_GAS_MARGIN_BPS`.
    pub fn from_config(
        client: Arc<dyn ContractClient>,
        tracker: Arc<dyn TransactionTracker>,
        config: &Config,
        runtime: Handle,
    ) -> lib_core::Result<Self> {
        let exchanges = ExchangeAddresses::from_config(config)?;
        Ok(Self::new(client, tracker, exchanges, config.gas_margin_bps, runtime))
    }

    /// Request an unbounded allowance for `token` on the context's exchange.
    ///
    /// Returns immediately. At most one chain runs per token while a previous
    /// approval is pending.
    pub fn unlock(&self, ctx: &WalletContext, token: &str) -> UnlockOutcome {
        if token.is_empty() {
            return UnlockOutcome::Skipped(SkipReason::EmptySelection);
        }
        if token == NATIVE_ASSET {
            return UnlockOutcome::Skipped(SkipReason::NativeAsset);
        }

        let key = token.to_ascii_lowercase();
        if self.inner.tracker.is_pending_approval(token) || self.inner.in_flight.lock().contains(&key) {
            info!(token, "Approval already pending");
            return UnlockOutcome::Skipped(SkipReason::AlreadyPending);
        }

        if !ctx.is_connected() {
            self.report(token, ChainError::Disconnected);
            return UnlockOutcome::Skipped(SkipReason::Disconnected);
        }

        let token_address = match Address::from_str(token) {
            Ok(address) => address,
            Err(_) => {
                self.report(token, ChainError::InvalidToken(token.to_string()));
                return UnlockOutcome::Skipped(SkipReason::InvalidToken);
            }
        };

        let spender = match self.inner.exchanges.for_context(ctx) {
            Some(spender) => spender,
            None => {
                let network = ctx.network_id().unwrap_or_default();
                self.report(token, ChainError::UnsupportedNetwork(network));
                return UnlockOutcome::Skipped(SkipReason::UnsupportedNetwork(network));
            }
        };

        // Check and insert under one lock so two callers cannot both start.
        if !self.inner.in_flight.lock().insert(key.clone()) {
            return UnlockOutcome::Skipped(SkipReason::AlreadyPending);
        }

        let guard = InFlightGuard {
            inner: self.inner.clone(),
            key,
        };
        let call = unlimited_approval(token_address, spender);
        let service = self.clone();
        let token = token.to_string();

        let handle = self.runtime.spawn(async move {
            let _guard = guard;
            // Failures are already reported to the tracker
            let _ = service.approve(&token, &call).await;
        });

        UnlockOutcome::Started(handle)
    }

    /// Estimate, apply the margin, submit, then record the transaction.
    ///
    /// Nothing is submitted when estimation fails.
    #[instrument(skip(self, call), fields(to = %call.to))]
    async fn approve(&self, token: &str, call: &PreparedCall) -> Result<TxHash, ChainError> {
        let estimate = match self.inner.client.estimate_gas(call).await {
            Ok(estimate) => estimate,
            Err(e) => {
                self.report(token, e.clone());
                return Err(e);
            }
        };

        let gas_limit = calculate_gas_margin(estimate, self.inner.gas_margin_bps);
        info!(%estimate, %gas_limit, "Submitting approval");

        let hash = match self.inner.client.send(call, gas_limit).await {
            Ok(hash) => hash,
            Err(e) => {
                self.report(token, e.clone());
                return Err(e);
            }
        };

        self.inner
            .tracker
            .add_transaction(hash, TransactionMeta::approval(token));
        info!(tx = %hash, "Approval submitted");

        Ok(hash)
    }

    fn report(&self, token: &str, error: ChainError) {
        warn!(token, error = %error, "Approval not submitted");
        self.inner.tracker.report_failure(ApprovalFailure {
            token: token.to_string(),
            error,
        });
    }
}
