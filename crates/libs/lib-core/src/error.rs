//! # Centralized Error Handling
//!
//! This module defines the workspace-wide error type [`AppError`]. It follows the
//! `thiserror` pattern for ergonomic error handling.
//!
//! ## Design Philosophy
//!
//! - **Single Error Type**: Library crates surface `AppError` at their public edges
//! - **Descriptive Messages**: Each variant includes a context string
//! - **Missing data is not an error**: absent balances, rates and prices degrade
//!   to empty display values and never reach this type
//!
//! ## Error Categories
//!
//! 1. **Input Errors** - User/provider input issues
//!    - [`InvalidInput`](AppError::InvalidInput)
//!    - [`Decoding`](AppError::Decoding)
//!    - [`NotFound`](AppError::NotFound)
//!
//! 2. **Startup Errors**
//!    - [`Config`](AppError::Config)
//!
//! Chain failures never surface here: the approval chain reports them to the
//! transaction tracker as `lib_evm::ChainError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_decimals(raw: &str) -> Result<u8> {
//!     raw.parse()
//!         .map_err(|_| AppError::InvalidInput(format!("Bad decimals: {}", raw)))
//! }
//!
//! assert!(parse_decimals("18").is_ok());
//! assert!(parse_decimals("-1").is_err());
//! ```
//!
//! ## Error Conversion
//!
//! - `From<serde_json::Error>` - Convert JSON errors to AppError
//! - `From<lib_utils::envs::Error>` - Convert env lookup errors to AppError

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Workspace-wide error type.
///
/// Each variant includes a descriptive `String` for context. The `#[error]` attribute
/// from `thiserror` provides automatic `Display` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data decoding error (JSON snapshot, amounts).
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Short variant name, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Decoding(_) => "Decoding",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert env lookup failures to `AppError::Config`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid format", name))
            }
        }
    }
}
