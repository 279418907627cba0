//! Localized strings shown by the panel.
//!
//! Translation tables live with the host; the panel only asks for keys.

/// String lookup for the panel and modal.
pub trait Labels: Send + Sync {
    fn unlock(&self) -> &str;
    fn pending(&self) -> &str;
    fn select_token(&self) -> &str;
    /// Shown when no token matches the search.
    fn no_token(&self) -> &str;
    fn search_or_paste(&self) -> &str;
    /// Shorter placeholder for narrow screens.
    fn search_or_paste_mobile(&self) -> &str;
}

/// English defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn unlock(&self) -> &str {
        "Unlock"
    }

    fn pending(&self) -> &str {
        "Pending"
    }

    fn select_token(&self) -> &str {
        "Select a token"
    }

    fn no_token(&self) -> &str {
        "No tokens found"
    }

    fn search_or_paste(&self) -> &str {
        "Search Token Name, Symbol, or Address"
    }

    fn search_or_paste_mobile(&self) -> &str {
        "Search Token or Address"
    }
}
