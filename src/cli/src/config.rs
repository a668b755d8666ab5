//! Configuration for the command line front end.

use crate::errors::CliError;
use anyhow::Result;
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Address the Transactions contract lands at on a fresh local dev chain.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Block explorer used for address links.
pub const DEFAULT_EXPLORER_URL: &str = "https://sepolia.etherscan.io";

/// Configuration for the command line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Wallet JSON-RPC endpoint; no wallet is available when unset
    pub wallet_url: Option<String>,
    /// Address of the deployed Transactions contract
    pub contract_address: String,
    /// Block explorer base URL
    pub explorer_url: String,
    /// File holding the per-origin storage
    pub storage_path: Option<PathBuf>,
    /// Confirmations to wait for after submitting a transfer
    pub confirmations: usize,
    /// Giphy API key for card images
    pub giphy_api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            wallet_url: None,
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            storage_path: None,
            confirmations: 1,
            giphy_api_key: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Parses the configured contract address.
    pub fn contract_address(&self) -> Result<Address, CliError> {
        Address::from_str(&self.contract_address).map_err(|e| {
            CliError::ConfigError(format!(
                "Invalid contract address {}: {}",
                self.contract_address, e
            ))
        })
    }

    /// Returns the storage file, defaulting to the user's data directory.
    pub fn storage_path(&self) -> PathBuf {
        match &self.storage_path {
            Some(path) => path.clone(),
            None => {
                let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                dir.push("ledgerlogic");
                dir.push("storage.json");
                dir
            }
        }
    }
}
