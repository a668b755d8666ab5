//! Command line front end for the LedgerLogic transfer ledger.

pub mod commands;
pub mod config;
pub mod errors;
pub mod render;

// Re-export commonly used types and functions
pub use commands::{connect, list, page, send, status};
pub use config::ClientConfig;
pub use errors::CliError;
