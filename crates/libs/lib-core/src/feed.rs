//! # Snapshot Feed
//!
//! Publishes market snapshots to subscribers.
//!
//! Providers own the token, balance and price caches and update them in the
//! background. Each update is published here as a fresh, immutable
//! [`MarketSnapshot`]; consumers hold a receiver, re-rank when it changes, and
//! never mutate the data they were given.
//!
//! ## Example
//!
//! ```rust
//! use lib_core::feed::SnapshotFeed;
//! use lib_core::model::MarketSnapshot;
//!
//! # async fn example() {
//! let feed = SnapshotFeed::new();
//! let mut rx = feed.subscribe();
//!
//! feed.publish(MarketSnapshot::default());
//! rx.changed().await.unwrap();
//! let latest = rx.borrow_and_update().clone();
//! # }
//! ```

use crate::model::MarketSnapshot;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Latest-value broadcast of market snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    tx: Arc<watch::Sender<Arc<MarketSnapshot>>>,
}

impl SnapshotFeed {
    /// Create a feed holding an empty snapshot.
    pub fn new() -> Self {
        Self::with_initial(MarketSnapshot::default())
    }

    pub fn with_initial(snapshot: MarketSnapshot) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(snapshot));
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current snapshot and notify subscribers.
    ///
    /// Subscribers are only woken when the snapshot actually differs.
    pub fn publish(&self, snapshot: MarketSnapshot) {
        let changed = self.tx.send_if_modified(|current| {
            if **current == snapshot {
                false
            } else {
                *current = Arc::new(snapshot);
                true
            }
        });

        debug!(changed, subscribers = self.tx.receiver_count(), "Market snapshot published");
    }

    /// The snapshot currently held by the feed.
    pub fn latest(&self) -> Arc<MarketSnapshot> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<MarketSnapshot>> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_subscriber_sees_update() {
        let feed = SnapshotFeed::new();
        let mut rx = feed.subscribe();

        let snapshot = MarketSnapshot {
            usd_price: Some(BigDecimal::from(2000)),
            ..Default::default()
        };
        feed.publish(snapshot.clone());

        rx.changed().await.unwrap();
        assert_eq!(**rx.borrow_and_update(), snapshot);
        assert_eq!(*feed.latest(), snapshot);
    }

    #[tokio::test]
    async fn test_identical_snapshot_does_not_notify() {
        let feed = SnapshotFeed::new();
        let rx = feed.subscribe();

        feed.publish(MarketSnapshot::default());
        assert!(!rx.has_changed().unwrap());
    }
}
