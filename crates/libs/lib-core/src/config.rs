//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables (and a
//! `.env` file, when present). All configuration is validated on startup to fail
//! fast if misconfigured.
//!
//! ## Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PICKER_GAS_MARGIN_BPS` | `1000` | Margin added to approval gas estimates, in basis points |
//! | `PICKER_LOG_LEVEL` | `picker=info,warn` | Fallback tracing filter when `RUST_LOG` is unset |
//! | `PICKER_EXCHANGE_ADDRESSES` | unset | `network_id=0xaddr,...` approval spender per network |
//! | `PICKER_LOG_DIR` | unset | Directory for the daily-rolling log file |
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let margin = core_config().gas_margin_bps;
//! ```

use crate::error::{AppError, Result};
use lib_utils::{checksum_address, get_env_opt, get_env_parse_or};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Gas margin used when `PICKER_GAS_MARGIN_BPS` is unset (+10%).
pub const DEFAULT_GAS_MARGIN_BPS: u32 = 1000;

/// Upper bound for the gas margin (+100%).
pub const MAX_GAS_MARGIN_BPS: u32 = 10_000;

/// Tracing filter used when neither `RUST_LOG` nor `PICKER_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "picker=info,warn";

/// Configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Proportional margin applied to approval gas estimates, in basis points.
    pub gas_margin_bps: u32,

    /// Fallback tracing filter directive.
    pub log_level: String,

    /// Spender (exchange) addresses keyed by network id, checksummed.
    pub exchange_addresses: HashMap<u64, String>,

    /// Log file directory; file logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gas_margin_bps: DEFAULT_GAS_MARGIN_BPS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            exchange_addresses: HashMap::new(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let gas_margin_bps = get_env_parse_or("PICKER_GAS_MARGIN_BPS", DEFAULT_GAS_MARGIN_BPS)?;

        let log_level =
            get_env_opt("PICKER_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let exchange_addresses = match get_env_opt("PICKER_EXCHANGE_ADDRESSES") {
            Some(raw) => parse_exchange_addresses(&raw)?,
            None => HashMap::new(),
        };

        let log_dir = get_env_opt("PICKER_LOG_DIR").map(PathBuf::from);

        Ok(Self {
            gas_margin_bps,
            log_level,
            exchange_addresses,
            log_dir,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.gas_margin_bps > MAX_GAS_MARGIN_BPS {
            return Err(AppError::Config(format!(
                "PICKER_GAS_MARGIN_BPS must be between 0 and {}",
                MAX_GAS_MARGIN_BPS
            )));
        }

        lib_utils::validate_not_empty(&self.log_level, "PICKER_LOG_LEVEL")
            .map_err(AppError::Config)?;

        Ok(())
    }
}

/// Parse `network_id=address` pairs separated by commas.
///
/// Addresses are normalized to their checksummed form; a bad checksum is a
/// configuration error rather than a silent fallback.
pub fn parse_exchange_addresses(raw: &str) -> Result<HashMap<u64, String>> {
    let mut addresses = HashMap::new();

    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (network, address) = pair.split_once('=').ok_or_else(|| {
            AppError::Config(format!("Expected network_id=address, got '{}'", pair))
        })?;

        let network_id: u64 = network.trim().parse().map_err(|_| {
            AppError::Config(format!("Invalid network id '{}'", network.trim()))
        })?;

        let address = checksum_address(address.trim()).ok_or_else(|| {
            AppError::Config(format!("Invalid exchange address for network {}", network_id))
        })?;

        addresses.insert(network_id, address);
    }

    Ok(addresses)
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Reads `.env` if present, then the process environment.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.gas_margin_bps, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_margin_out_of_range() {
        let config = Config {
            gas_margin_bps: 20_000,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_exchange_addresses() {
        let parsed = parse_exchange_addresses(
            "1=0x6b175474e89094c44da98b954eedeac495271d0f, 4 = 0x6B175474E89094C44Da98b954EedeAC495271d0F,",
        )
        .unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[&1], "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        assert_eq!(parsed[&4], "0x6B175474E89094C44Da98b954EedeAC495271d0F");
    }

    #[test]
    fn test_parse_exchange_addresses_rejects_garbage() {
        assert!(parse_exchange_addresses("mainnet=0x00").is_err());
        assert!(parse_exchange_addresses("1").is_err());
        assert!(parse_exchange_addresses("1=0x1234").is_err());
        assert!(parse_exchange_addresses("").unwrap().is_empty());
    }
}
