//! The wallet capability handed to the client.

use crate::errors::BridgeError;
use crate::ledger::{ContractLedger, TransferLedger};
use crate::wallet::{RpcWallet, WalletProvider};
use ethers::{
    providers::{Http, Provider},
    types::Address,
};
use tracing::info;
use std::sync::Arc;

/// A connected wallet together with the contract it talks to.
///
/// A client without an `Extension` behaves as if no wallet were installed.
#[derive(Clone)]
pub struct Extension {
    /// Account and value-transfer requests
    pub wallet: Arc<dyn WalletProvider>,
    /// Transfer contract reads and appends
    pub ledger: Arc<dyn TransferLedger>,
}

impl Extension {
    /// Bundles a wallet and a ledger.
    pub fn new(wallet: Arc<dyn WalletProvider>, ledger: Arc<dyn TransferLedger>) -> Self {
        Self { wallet, ledger }
    }

    /// Connects to a wallet JSON-RPC endpoint and the contract at `contract_address`.
    pub fn connect_rpc(
        url: &str,
        contract_address: Address,
        confirmations: usize,
    ) -> Result<Self, BridgeError> {
        let provider = Provider::<Http>::try_from(url)
            .map_err(|e| BridgeError::WalletError(format!("Failed to create provider: {}", e)))?;
        let provider = Arc::new(provider);

        let wallet = RpcWallet::new(provider.clone());
        let ledger =
            ContractLedger::new(provider, contract_address)?.with_confirmations(confirmations);

        info!("Wallet endpoint {} using contract {:?}", url, ledger.address());
        Ok(Self::new(Arc::new(wallet), Arc::new(ledger)))
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension").finish_non_exhaustive()
    }
}
