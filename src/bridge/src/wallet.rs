//! Wallet access for the bridge.

use crate::errors::BridgeError;
use async_trait::async_trait;
use ethers::{
    providers::{Http, Provider},
    types::{Address, TransactionRequest, H256, U256},
};
use tracing::{debug, error};
use std::sync::Arc;

/// Gas limit sent with every plain value transfer (`0x5208`).
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// The account and value-transfer requests a wallet extension answers.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the accounts already authorized for this client, without prompting.
    async fn accounts(&self) -> Result<Vec<Address>, BridgeError>;

    /// Asks the wallet to authorize this client and returns the granted accounts.
    async fn request_accounts(&self) -> Result<Vec<Address>, BridgeError>;

    /// Asks the wallet to send `value` from `from` to `to`.
    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<H256, BridgeError>;
}

/// A wallet reached over its JSON-RPC endpoint.
#[derive(Clone, Debug)]
pub struct RpcWallet {
    /// The provider for the wallet endpoint
    provider: Arc<Provider<Http>>,
}

impl RpcWallet {
    /// Creates a wallet over an existing provider.
    pub fn new(provider: Arc<Provider<Http>>) -> Self {
        Self { provider }
    }

    /// Creates a wallet for the given endpoint URL.
    pub fn from_url(url: &str) -> Result<Self, BridgeError> {
        let provider = Provider::<Http>::try_from(url)
            .map_err(|e| BridgeError::WalletError(format!("Failed to create provider: {}", e)))?;
        Ok(Self::new(Arc::new(provider)))
    }

    async fn request_account_list(&self, method: &str) -> Result<Vec<Address>, BridgeError> {
        let accounts: Vec<Address> = self.provider.request(method, ()).await.map_err(|e| {
            error!("Wallet request {} failed: {}", method, e);
            BridgeError::WalletError(format!("{} failed: {}", method, e))
        })?;
        debug!("{} returned {} account(s)", method, accounts.len());
        Ok(accounts)
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn accounts(&self) -> Result<Vec<Address>, BridgeError> {
        self.request_account_list("eth_accounts").await
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, BridgeError> {
        self.request_account_list("eth_requestAccounts").await
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<H256, BridgeError> {
        let tx = TransactionRequest::new()
            .from(from)
            .to(to)
            .gas(TRANSFER_GAS_LIMIT)
            .value(value);

        let tx_hash: H256 = self
            .provider
            .request("eth_sendTransaction", [tx])
            .await
            .map_err(|e| {
                error!("Value transfer to {:?} failed: {}", to, e);
                BridgeError::WalletError(format!("eth_sendTransaction failed: {}", e))
            })?;

        debug!("Value transfer {:?} submitted", tx_hash);
        Ok(tx_hash)
    }
}
