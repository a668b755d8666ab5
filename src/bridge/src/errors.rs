/// Error types for the bridge crate.
use std::error::Error as StdError;
use std::fmt;

/// Message surfaced whenever no wallet is available to the client.
pub const EXTENSION_UNAVAILABLE: &str = "Please install MetaMask.";

/// Errors that can occur in the bridge crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Error when no wallet extension is available.
    ExtensionUnavailable,

    /// Error when a wallet request fails or is rejected.
    WalletError(String),

    /// Error when a contract call fails.
    ContractError(String),

    /// Error when a submitted transaction fails to be mined.
    TransactionError(String),

    /// Error when the bundled contract interface cannot be loaded.
    AbiError(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::ExtensionUnavailable => write!(f, "{}", EXTENSION_UNAVAILABLE),
            BridgeError::WalletError(msg) => write!(f, "Wallet error: {}", msg),
            BridgeError::ContractError(msg) => write!(f, "Contract error: {}", msg),
            BridgeError::TransactionError(msg) => write!(f, "Transaction error: {}", msg),
            BridgeError::AbiError(msg) => write!(f, "ABI error: {}", msg),
        }
    }
}

impl StdError for BridgeError {}

