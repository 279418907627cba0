//! # Currency Input Panel
//!
//! Amount field, token selector and unlock button.
//!
//! The panel holds no balances or prices. The host passes the current
//! [`MarketSnapshot`] and the transaction tracker into each call and receives
//! [`PanelEvent`]s back over a channel.

use crate::events::{emit, PanelEvent};
use crate::labels::Labels;
use crate::modal::CurrencySelectModal;
use async_channel::Sender;
use lib_core::{MarketSnapshot, NATIVE_ASSET};
use lib_evm::{ApprovalService, TransactionTracker, UnlockOutcome, WalletContext};
use tracing::debug;

/// Placeholder of the amount field.
pub const AMOUNT_PLACEHOLDER: &str = "0.0";

/// Host-supplied configuration of a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelProps {
    pub title: String,
    pub description: String,
    /// Text next to the selector, usually the balance ("Enter max" on click).
    pub extra_text: String,
    pub error_message: Option<String>,
    pub disable_unlock: bool,
    pub disable_token_select: bool,
    /// Selected token address; empty when nothing is selected.
    pub selected_token: String,
    pub show_unlock: bool,
    /// Amount field contents.
    pub value: String,
}

/// State of the unlock button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockButton {
    Hidden,
    Unlock,
    Pending,
}

impl UnlockButton {
    pub fn label<'a>(&self, labels: &'a dyn Labels) -> Option<&'a str> {
        match self {
            UnlockButton::Hidden => None,
            UnlockButton::Unlock => Some(labels.unlock()),
            UnlockButton::Pending => Some(labels.pending()),
        }
    }
}

/// Everything needed to draw the panel once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub description: String,
    pub selector_label: String,
    /// Dropdown arrow next to the selector.
    pub show_dropdown: bool,
    pub unlock: UnlockButton,
    pub extra_text: String,
    pub has_error: bool,
    pub value: String,
    pub placeholder: &'static str,
}

/// A currency input panel and its token modal.
#[derive(Debug, Clone)]
pub struct CurrencyInputPanel {
    props: PanelProps,
    /// Absent when token selection is disabled.
    modal: Option<CurrencySelectModal>,
    events: Sender<PanelEvent>,
}

impl CurrencyInputPanel {
    pub fn new(props: PanelProps, events: Sender<PanelEvent>) -> Self {
        let modal = (!props.disable_token_select).then(|| CurrencySelectModal::new(events.clone()));
        Self { props, modal, events }
    }

    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    /// Update the selection after the host handled `TokenSelected`.
    pub fn set_selected_token(&mut self, address: impl Into<String>) {
        self.props.selected_token = address.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
    }

    pub fn modal(&self) -> Option<&CurrencySelectModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut CurrencySelectModal> {
        self.modal.as_mut()
    }

    /// Selector click. Returns whether the modal opened.
    pub fn open_selector(&mut self) -> bool {
        match self.modal.as_mut() {
            Some(modal) => {
                modal.open();
                true
            }
            None => false,
        }
    }

    /// Whether a key press may reach the amount field. The minus sign is rejected.
    pub fn accepts_key(&self, key: char) -> bool {
        key != '-'
    }

    /// Forward the amount field's raw text to the host.
    pub fn on_amount_input(&mut self, raw: &str) {
        emit(&self.events, PanelEvent::ValueChanged(raw.to_string()));
    }

    pub fn click_extra_text(&self) {
        emit(&self.events, PanelEvent::ExtraTextClicked);
    }

    /// Symbol of the selected token, or the localized placeholder.
    pub fn selector_label(&self, snapshot: &MarketSnapshot, labels: &dyn Labels) -> String {
        snapshot
            .symbol_of(&self.props.selected_token)
            .unwrap_or_else(|| labels.select_token())
            .to_string()
    }

    pub fn unlock_button(&self, tracker: &dyn TransactionTracker) -> UnlockButton {
        let token = self.props.selected_token.as_str();
        if self.props.disable_unlock || !self.props.show_unlock || token == NATIVE_ASSET || token.is_empty() {
            return UnlockButton::Hidden;
        }

        if tracker.is_pending_approval(token) {
            UnlockButton::Pending
        } else {
            UnlockButton::Unlock
        }
    }

    /// Unlock click. Only an `Unlock` button starts an approval.
    pub fn click_unlock(
        &self,
        service: &ApprovalService,
        tracker: &dyn TransactionTracker,
        ctx: &WalletContext,
    ) -> Option<UnlockOutcome> {
        match self.unlock_button(tracker) {
            UnlockButton::Unlock => Some(service.unlock(ctx, &self.props.selected_token)),
            state => {
                debug!(?state, "Unlock click ignored");
                None
            }
        }
    }

    pub fn view(&self, snapshot: &MarketSnapshot, tracker: &dyn TransactionTracker, labels: &dyn Labels) -> PanelView {
        PanelView {
            title: self.props.title.clone(),
            description: self.props.description.clone(),
            selector_label: self.selector_label(snapshot, labels),
            show_dropdown: !self.props.disable_token_select,
            unlock: self.unlock_button(tracker),
            extra_text: self.props.extra_text.clone(),
            has_error: self.props.error_message.is_some(),
            value: self.props.value.clone(),
            placeholder: AMOUNT_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::EnglishLabels;
    use alloy_primitives::{Address, TxHash, U256};
    use lib_core::TokenDetails;
    use lib_evm::{ChainError, ContractClient, ExchangeAddresses, InMemoryTracker, PreparedCall, TransactionMeta};
    use std::collections::HashMap;
    use std::sync::Arc;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    fn props(selected: &str) -> PanelProps {
        PanelProps {
            title: "Input".to_string(),
            selected_token: selected.to_string(),
            show_unlock: true,
            ..Default::default()
        }
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::new(
            vec![TokenDetails {
                address: DAI.to_string(),
                symbol: "DAI".to_string(),
                name: "Dai Stablecoin".to_string(),
                decimals: 18,
            }],
            HashMap::new(),
            None,
        )
    }

    struct FixedClient;

    #[async_trait::async_trait]
    impl ContractClient for FixedClient {
        async fn estimate_gas(&self, _call: &PreparedCall) -> Result<U256, ChainError> {
            Ok(U256::from(46_000u64))
        }

        async fn send(&self, _call: &PreparedCall, _gas_limit: U256) -> Result<TxHash, ChainError> {
            Ok(TxHash::repeat_byte(0x01))
        }
    }

    #[test]
    fn test_unlock_button_states() {
        let (tx, _rx) = async_channel::unbounded();
        let tracker = InMemoryTracker::new();

        assert_eq!(CurrencyInputPanel::new(props(""), tx.clone()).unlock_button(&tracker), UnlockButton::Hidden);
        assert_eq!(
            CurrencyInputPanel::new(props(NATIVE_ASSET), tx.clone()).unlock_button(&tracker),
            UnlockButton::Hidden
        );

        let mut hidden = props(DAI);
        hidden.show_unlock = false;
        assert_eq!(CurrencyInputPanel::new(hidden, tx.clone()).unlock_button(&tracker), UnlockButton::Hidden);

        let mut disabled = props(DAI);
        disabled.disable_unlock = true;
        assert_eq!(CurrencyInputPanel::new(disabled, tx.clone()).unlock_button(&tracker), UnlockButton::Hidden);

        let panel = CurrencyInputPanel::new(props(DAI), tx);
        assert_eq!(panel.unlock_button(&tracker), UnlockButton::Unlock);
        assert_eq!(panel.unlock_button(&tracker).label(&EnglishLabels), Some("Unlock"));

        tracker.add_transaction(TxHash::repeat_byte(0x02), TransactionMeta::approval(DAI));
        assert_eq!(panel.unlock_button(&tracker), UnlockButton::Pending);
        assert_eq!(panel.unlock_button(&tracker).label(&EnglishLabels), Some("Pending"));
    }

    #[test]
    fn test_selector() {
        let (tx, _rx) = async_channel::unbounded();

        let mut panel = CurrencyInputPanel::new(props(""), tx.clone());
        assert_eq!(panel.selector_label(&snapshot(), &EnglishLabels), "Select a token");
        assert!(panel.open_selector());
        assert!(panel.modal().is_some_and(|m| m.is_open()));

        panel.set_selected_token(DAI);
        assert_eq!(panel.selector_label(&snapshot(), &EnglishLabels), "DAI");

        let mut locked = props(DAI);
        locked.disable_token_select = true;
        let mut locked = CurrencyInputPanel::new(locked, tx);
        assert!(!locked.open_selector());
        assert!(locked.modal().is_none());
    }

    #[test]
    fn test_amount_field() {
        let (tx, rx) = async_channel::unbounded();
        let mut panel = CurrencyInputPanel::new(props(DAI), tx);

        assert!(!panel.accepts_key('-'));
        assert!(panel.accepts_key('1'));
        assert!(panel.accepts_key('.'));

        panel.on_amount_input("1.50");
        panel.click_extra_text();
        assert_eq!(rx.try_recv().unwrap(), PanelEvent::ValueChanged("1.50".to_string()));
        assert_eq!(rx.try_recv().unwrap(), PanelEvent::ExtraTextClicked);
    }

    #[test]
    fn test_selection_flows_through_panel_channel() {
        let (tx, rx) = async_channel::unbounded();
        let mut panel = CurrencyInputPanel::new(props(""), tx);

        panel.open_selector();
        if let Some(modal) = panel.modal_mut() {
            modal.select(DAI);
        }
        assert_eq!(rx.try_recv().unwrap(), PanelEvent::TokenSelected(DAI.to_string()));
    }

    #[test]
    fn test_view() {
        let (tx, _rx) = async_channel::unbounded();
        let mut with_error = props(DAI);
        with_error.error_message = Some("Insufficient balance".to_string());
        let panel = CurrencyInputPanel::new(with_error, tx);

        let view = panel.view(&snapshot(), &InMemoryTracker::new(), &EnglishLabels);
        assert_eq!(view.selector_label, "DAI");
        assert!(view.show_dropdown);
        assert!(view.has_error);
        assert_eq!(view.unlock, UnlockButton::Unlock);
        assert_eq!(view.placeholder, "0.0");
    }

    #[tokio::test]
    async fn test_click_unlock_then_pending() {
        let (tx, _rx) = async_channel::unbounded();
        let panel = CurrencyInputPanel::new(props(DAI), tx);
        let tracker = Arc::new(InMemoryTracker::new());
        let service = ApprovalService::new(
            Arc::new(FixedClient),
            tracker.clone(),
            ExchangeAddresses::new(HashMap::from([(1, Address::repeat_byte(0x11))])),
            1000,
            tokio::runtime::Handle::current(),
        );
        let ctx = WalletContext::connected(1, Address::repeat_byte(0x22));

        match panel.click_unlock(&service, tracker.as_ref(), &ctx) {
            Some(UnlockOutcome::Started(handle)) => handle.await.unwrap(),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(panel.unlock_button(tracker.as_ref()), UnlockButton::Pending);
        assert!(panel.click_unlock(&service, tracker.as_ref(), &ctx).is_none());
    }
}
