//! # Utilities Library
//!
//! Shared utility functions for environment variables, time and address validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env_opt, get_env_parse_or};
pub use time::now_utc;
pub use validation::{checksum_address, is_address_like, validate_not_empty};
