//! Error types for the command line front end.

use ledgerlogic_client::ClientError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the command line front end.
#[derive(Debug)]
pub enum CliError {
    /// Error raised by the store, the wallet or the contract.
    ClientError(ClientError),

    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error when the configuration is unusable.
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ClientError(e) => write!(f, "{}", e),
            CliError::FileError(e) => write!(f, "File error: {}", e),
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl StdError for CliError {}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        CliError::ClientError(error)
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::FileError(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::JsonError(error)
    }
}
