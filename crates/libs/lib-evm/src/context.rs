//! # Wallet Context
//!
//! Network and account of the connected wallet, passed explicitly to whatever
//! needs it instead of being read from a global.
//!
//! ## Lifecycle
//!
//! ```text
//! disconnected --connect(network, account)--> connected
//! connected    --switch_network(network)-----> connected
//! connected    --disconnect()----------------> disconnected
//! ```

use alloy_primitives::Address;
use lib_core::{AppError, Config, Result};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::info;

/// Connection state of the wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletContext {
    network_id: Option<u64>,
    account: Option<Address>,
}

impl WalletContext {
    /// A context with no wallet connected.
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(network_id: u64, account: Address) -> Self {
        Self {
            network_id: Some(network_id),
            account: Some(account),
        }
    }

    pub fn connect(&mut self, network_id: u64, account: Address) {
        info!(network_id, account = %account, "Wallet connected");
        self.network_id = Some(network_id);
        self.account = Some(account);
    }

    pub fn switch_network(&mut self, network_id: u64) {
        info!(from = ?self.network_id, to = network_id, "Network switched");
        self.network_id = Some(network_id);
    }

    pub fn disconnect(&mut self) {
        info!("Wallet disconnected");
        self.network_id = None;
        self.account = None;
    }

    pub fn network_id(&self) -> Option<u64> {
        self.network_id
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Exchange contract (approval spender) per network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeAddresses {
    by_network: HashMap<u64, Address>,
}

impl ExchangeAddresses {
    pub fn new(by_network: HashMap<u64, Address>) -> Self {
        Self { by_network }
    }

    /// Build the table from `PICKER_EXCHANGE_ADDRESSES`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let by_network = config
            .exchange_addresses
            .iter()
            .map(|(network, address)| {
                Address::from_str(address)
                    .map(|a| (*network, a))
                    .map_err(|e| AppError::Config(format!("Exchange address for network {}: {}", network, e)))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self { by_network })
    }

    /// Spender for the context's network, if one is configured.
    pub fn for_context(&self, ctx: &WalletContext) -> Option<Address> {
        ctx.network_id().and_then(|id| self.by_network.get(&id).copied())
    }

    pub fn get(&self, network_id: u64) -> Option<Address> {
        self.by_network.get(&network_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const EXCHANGE: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");

    #[test]
    fn test_lifecycle() {
        let mut ctx = WalletContext::disconnected();
        assert!(!ctx.is_connected());

        ctx.connect(1, Address::ZERO);
        assert!(ctx.is_connected());
        assert_eq!(ctx.network_id(), Some(1));

        ctx.switch_network(4);
        assert_eq!(ctx.network_id(), Some(4));

        ctx.disconnect();
        assert_eq!(ctx, WalletContext::disconnected());
    }

    #[test]
    fn test_exchange_lookup() {
        let mut config = Config::default();
        config
            .exchange_addresses
            .insert(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string());

        let table = ExchangeAddresses::from_config(&config).unwrap();
        assert_eq!(table.get(1), Some(EXCHANGE));
        assert_eq!(table.for_context(&WalletContext::connected(1, Address::ZERO)), Some(EXCHANGE));
        assert_eq!(table.for_context(&WalletContext::connected(4, Address::ZERO)), None);
        assert_eq!(table.for_context(&WalletContext::disconnected()), None);
    }
}
