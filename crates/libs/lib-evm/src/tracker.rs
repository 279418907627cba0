//! # Transaction Tracker
//!
//! Records submitted transactions and answers "is an approval for this token
//! still pending?".
//!
//! The approval chain writes here and never reports back to the panel that
//! started it: the panel may be gone by the time the chain resolves. Failures
//! go out on a broadcast channel for whoever shows notifications.

use crate::error::ChainError;
use alloy_primitives::TxHash;
use chrono::{DateTime, Utc};
use lib_utils::now_utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Capacity of the failure channel; slow receivers lose the oldest failures.
const FAILURE_CHANNEL_CAPACITY: usize = 64;

/// What a tracked transaction is for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionMeta {
    /// Token address, when the transaction is an allowance approval.
    pub approval: Option<String>,
}

impl TransactionMeta {
    pub fn approval(token: impl Into<String>) -> Self {
        Self {
            approval: Some(token.into()),
        }
    }
}

/// A submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub hash: TxHash,
    pub meta: TransactionMeta,
    pub added_at: DateTime<Utc>,
    /// `None` until a receipt arrives; then whether it succeeded.
    pub receipt: Option<bool>,
}

impl TransactionRecord {
    pub fn is_pending(&self) -> bool {
        self.receipt.is_none()
    }
}

/// An approval that never made it on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalFailure {
    pub token: String,
    pub error: ChainError,
}

/// Sink for submitted transactions and approval failures.
pub trait TransactionTracker: Send + Sync {
    fn add_transaction(&self, hash: TxHash, meta: TransactionMeta);

    /// True while an approval for `token` has been submitted but not confirmed.
    fn is_pending_approval(&self, token: &str) -> bool;

    fn report_failure(&self, failure: ApprovalFailure);
}

/// In-process tracker.
#[derive(Debug)]
pub struct InMemoryTracker {
    records: RwLock<HashMap<TxHash, TransactionRecord>>,
    failures: broadcast::Sender<ApprovalFailure>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        let (failures, _) = broadcast::channel(FAILURE_CHANNEL_CAPACITY);
        Self {
            records: RwLock::new(HashMap::new()),
            failures,
        }
    }

    /// Receive approval failures reported after this call.
    pub fn subscribe_failures(&self) -> broadcast::Receiver<ApprovalFailure> {
        self.failures.subscribe()
    }

    /// Record the receipt for `hash`. Returns false for unknown transactions.
    pub fn finalize(&self, hash: TxHash, success: bool) -> bool {
        let mut records = self.records.write();
        match records.get_mut(&hash) {
            Some(record) => {
                record.receipt = Some(success);
                info!(tx = %hash, success, "Transaction finalized");
                true
            }
            None => {
                warn!(tx = %hash, "Receipt for untracked transaction");
                false
            }
        }
    }

    pub fn record(&self, hash: &TxHash) -> Option<TransactionRecord> {
        self.records.read().get(hash).cloned()
    }

    /// All records, oldest first.
    pub fn records(&self) -> Vec<TransactionRecord> {
        let mut records: Vec<TransactionRecord> = self.records.read().values().cloned().collect();
        records.sort_by_key(|r| r.added_at);
        records
    }
}

impl Default for InMemoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionTracker for InMemoryTracker {
    fn add_transaction(&self, hash: TxHash, meta: TransactionMeta) {
        debug!(tx = %hash, approval = ?meta.approval, "Tracking transaction");
        self.records.write().insert(
            hash,
            TransactionRecord {
                hash,
                meta,
                added_at: now_utc(),
                receipt: None,
            },
        );
    }

    fn is_pending_approval(&self, token: &str) -> bool {
        self.records.read().values().any(|record| {
            record.is_pending()
                && record
                    .meta
                    .approval
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(token))
        })
    }

    fn report_failure(&self, failure: ApprovalFailure) {
        warn!(token = %failure.token, error = %failure.error, "Approval failed");
        // No receivers is fine
        let _ = self.failures.send(failure);
    }
}
