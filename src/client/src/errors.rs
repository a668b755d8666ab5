//! Error types for the client crate.

use ledgerlogic_bridge::BridgeError;
use ledgerlogic_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the client crate.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error raised by the wallet or the contract.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// Error when form input cannot be converted.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error when a submission is attempted before a wallet is connected.
    #[error("No connected account")]
    NoAccount,

    /// Error when the count storage cannot be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error when a keyword image lookup fails.
    #[error("Image lookup failed: {0}")]
    Image(String),
}

impl ClientError {
    /// Returns true when the failure is a missing wallet extension.
    pub fn is_extension_unavailable(&self) -> bool {
        matches!(self, ClientError::Bridge(BridgeError::ExtensionUnavailable))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(error: std::io::Error) -> Self {
        ClientError::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Storage(error.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Image(error.to_string())
    }
}
