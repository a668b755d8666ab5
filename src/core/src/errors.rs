//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error when an amount cannot be converted to the base unit.
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The amount as entered
        amount: String,
        /// Why the conversion failed
        reason: String,
    },

    /// Error when an address cannot be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
