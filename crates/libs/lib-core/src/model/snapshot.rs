//! Market snapshot: the read-only input to one ranking pass.

use super::balance::{parse_rate, BalanceRecord};
use bigdecimal::BigDecimal;
use shared::dto::token::{MarketSnapshotDto, TokenDetails};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Token metadata, balances and the native asset's USD price at one point in time.
///
/// `tokens` keeps provider order; that order is the final tie-break of the
/// ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub tokens: Vec<TokenDetails>,
    pub balances: HashMap<String, BalanceRecord>,
    pub usd_price: Option<BigDecimal>,
}

impl MarketSnapshot {
    pub fn new(
        tokens: Vec<TokenDetails>,
        balances: HashMap<String, BalanceRecord>,
        usd_price: Option<BigDecimal>,
    ) -> Self {
        Self {
            tokens,
            balances,
            usd_price,
        }
    }

    /// Look up a token by address.
    pub fn token(&self, address: &str) -> Option<&TokenDetails> {
        self.tokens.iter().find(|t| t.address == address)
    }

    /// Balance record for `address`, if the provider has reported one.
    pub fn balance(&self, address: &str) -> Option<&BalanceRecord> {
        self.balances.get(address)
    }

    /// Symbol of the token at `address`, if known.
    pub fn symbol_of(&self, address: &str) -> Option<&str> {
        self.token(address).map(|t| t.symbol.as_str())
    }
}

impl From<MarketSnapshotDto> for MarketSnapshot {
    fn from(dto: MarketSnapshotDto) -> Self {
        let usd_price = dto.usd_price.as_deref().and_then(|raw| {
            parse_rate(raw).or_else(|| {
                warn!(usd_price = %raw, "Unusable reference price, USD values will be absent");
                None
            })
        });

        let balances: HashMap<String, BalanceRecord> = dto
            .balances
            .iter()
            .map(|(address, entry)| (address.clone(), BalanceRecord::from_entry(address, entry)))
            .collect();

        debug!(
            tokens = dto.tokens.len(),
            balances = balances.len(),
            has_price = usd_price.is_some(),
            "Market snapshot decoded"
        );

        Self {
            tokens: dto.tokens,
            balances,
            usd_price,
        }
    }
}
