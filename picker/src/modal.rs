//! # Select Token Modal
//!
//! Search box and ranked token list of the currency input panel.
//!
//! The modal owns only its search text and its open flag. Rows are recomputed
//! from whatever snapshot the host passes in, so a new balance or price shows
//! up on the next call to [`CurrencySelectModal::content`].

use crate::events::{emit, PanelEvent};
use crate::labels::Labels;
use async_channel::Sender;
use lib_core::{MarketSnapshot, RankedEntry, SearchQuery, TokenListRanker};
use serde::Serialize;
use tracing::debug;

/// Balance column of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BalanceCell {
    Value(String),
    /// Zero balance, or no balance and no connected account.
    Dash,
    /// Balance not loaded yet for a connected account.
    Loading,
}

impl BalanceCell {
    fn for_entry(entry: &RankedEntry, account_connected: bool) -> Self {
        match entry.display_balance.as_deref() {
            // A less-than marker is a non-zero balance too small to show
            Some(balance) if balance != "0" => BalanceCell::Value(balance.to_string()),
            Some(_) => BalanceCell::Dash,
            None if account_connected => BalanceCell::Loading,
            None => BalanceCell::Dash,
        }
    }

    /// Plain-text rendering.
    pub fn text(&self) -> &str {
        match self {
            BalanceCell::Value(balance) => balance,
            BalanceCell::Dash => "-",
            BalanceCell::Loading => "…",
        }
    }
}

/// One token row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub balance: BalanceCell,
    /// Empty when the USD value is unknown.
    pub usd: String,
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Rows(Vec<RowView>),
    /// Nothing matches; carries the localized message.
    Empty(String),
}

/// Modal state.
#[derive(Debug, Clone)]
pub struct CurrencySelectModal {
    open: bool,
    search_query: String,
    events: Sender<PanelEvent>,
}

impl CurrencySelectModal {
    pub fn new(events: Sender<PanelEvent>) -> Self {
        Self {
            open: false,
            search_query: String::new(),
            events,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Handle a change of the search box.
    ///
    /// A valid address replaces the input in its checksummed form. If that
    /// address is not in the token list a metadata lookup is requested.
    pub fn on_search_input(&mut self, input: &str, snapshot: &MarketSnapshot) {
        let query = SearchQuery::new(input);

        if let Some(address) = query.address() {
            let known = snapshot
                .tokens
                .iter()
                .any(|t| t.address.eq_ignore_ascii_case(address));
            if !known {
                debug!(address, "Unknown token address pasted");
                emit(&self.events, PanelEvent::TokenLookupRequested(address.to_string()));
            }
        }

        self.search_query = query.as_str().to_string();
    }

    /// Pick a token: clear the search, report the selection, close.
    pub fn select(&mut self, address: &str) {
        self.search_query.clear();
        emit(&self.events, PanelEvent::TokenSelected(address.to_string()));
        self.open = false;
    }

    /// Close without selecting. The search is cleared.
    pub fn dismiss(&mut self) {
        self.search_query.clear();
        self.open = false;
    }

    pub fn placeholder<'a>(&self, labels: &'a dyn Labels, mobile: bool) -> &'a str {
        if mobile {
            labels.search_or_paste_mobile()
        } else {
            labels.search_or_paste()
        }
    }

    /// Rows for the current search, or the empty-result message.
    pub fn content(&self, snapshot: &MarketSnapshot, account_connected: bool, labels: &dyn Labels) -> ModalContent {
        let entries = TokenListRanker::new().rank_filtered(snapshot, &SearchQuery::new(&self.search_query));

        if entries.is_empty() {
            return ModalContent::Empty(labels.no_token().to_string());
        }

        ModalContent::Rows(
            entries
                .iter()
                .map(|entry| RowView {
                    address: entry.address.clone(),
                    symbol: entry.symbol.clone(),
                    name: entry.name.clone(),
                    balance: BalanceCell::for_entry(entry, account_connected),
                    usd: entry.display_usd().unwrap_or_default(),
                })
                .collect(),
        )
    }
}
