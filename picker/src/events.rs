//! # Panel Events
//!
//! Everything the panel and its modal report to the host application.

use async_channel::Sender;
use tracing::warn;

/// Event emitted by the currency input panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Raw text of the amount field, forwarded unchanged.
    ValueChanged(String),
    /// Address of the token picked in the modal.
    TokenSelected(String),
    /// A pasted address is not in the token list; its metadata should be fetched.
    TokenLookupRequested(String),
    /// The extra text next to the selector ("Enter max") was clicked.
    ExtraTextClicked,
}

/// Send without blocking. A closed channel means the host is gone.
pub(crate) fn emit(tx: &Sender<PanelEvent>, event: PanelEvent) {
    if let Err(e) = tx.try_send(event) {
        warn!(error = %e, "Panel event dropped");
    }
}
