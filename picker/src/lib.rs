//! # Token Picker
//!
//! State of a currency input panel and its select-token modal, independent of
//! any rendering toolkit.
//!
//! ## Architecture
//!
//! ```text
//! SnapshotFeed ──watch──> host ──&MarketSnapshot──> CurrencyInputPanel
//!                                                    ├─ CurrencySelectModal (rows, search)
//!                                                    └─ unlock ──> ApprovalService (background)
//!        host <──async_channel── PanelEvent
//! ```

pub mod cli;
pub mod events;
pub mod labels;
pub mod logger;
pub mod modal;
pub mod panel;

pub use events::PanelEvent;
pub use labels::{EnglishLabels, Labels};
pub use modal::{BalanceCell, CurrencySelectModal, ModalContent, RowView};
pub use panel::{CurrencyInputPanel, PanelProps, PanelView, UnlockButton};
