//! Access to the Transactions contract.

use crate::bindings::{TransactionsContract, TransferStruct};
use crate::errors::BridgeError;
use async_trait::async_trait;
use ethers::{
    providers::{Middleware, PendingTransaction},
    types::{Address, H256, U256},
};
use ledgerlogic_core::TransferRecord;
use tracing::{debug, error};
use std::sync::Arc;

/// The read and append operations the transfer contract exposes.
#[async_trait]
pub trait TransferLedger: Send + Sync {
    /// Reads every stored transfer, oldest first.
    async fn all_transfers(&self) -> Result<Vec<TransferRecord>, BridgeError>;

    /// Reads the number of stored transfers.
    async fn transfer_count(&self) -> Result<U256, BridgeError>;

    /// Submits an append call from `from` and returns its transaction hash.
    async fn add_to_blockchain(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<H256, BridgeError>;

    /// Resolves once the given append transaction has been mined.
    async fn wait_for(&self, tx_hash: H256) -> Result<(), BridgeError>;
}

/// Decodes a contract entry into a transfer record.
pub fn decode_transfer(raw: TransferStruct) -> Result<TransferRecord, BridgeError> {
    if raw.timestamp.bits() > 64 {
        return Err(BridgeError::ContractError(format!(
            "Timestamp out of range: {}",
            raw.timestamp
        )));
    }

    Ok(TransferRecord::new(
        raw.sender,
        raw.receiver,
        raw.timestamp.low_u64(),
        raw.message,
        raw.keyword,
        raw.amount,
    ))
}

/// A transfer ledger backed by the deployed contract.
pub struct ContractLedger<M: Middleware> {
    /// The Transactions contract
    contract: TransactionsContract<M>,
    /// The middleware the contract talks through
    client: Arc<M>,
    /// Confirmations to wait for after an append
    confirmations: usize,
}

impl<M: Middleware + 'static> ContractLedger<M> {
    /// Creates a ledger for the contract at `contract_address`.
    pub fn new(client: Arc<M>, contract_address: Address) -> Result<Self, BridgeError> {
        let contract = TransactionsContract::new(contract_address, client.clone())?;
        Ok(Self {
            contract,
            client,
            confirmations: 1,
        })
    }

    /// Sets how many confirmations `wait_for` requires.
    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations.max(1);
        self
    }

    /// Returns the contract address.
    pub fn address(&self) -> Address {
        self.contract.address()
    }
}

#[async_trait]
impl<M: Middleware + 'static> TransferLedger for ContractLedger<M> {
    async fn all_transfers(&self) -> Result<Vec<TransferRecord>, BridgeError> {
        let raw = self
            .contract
            .get_all_transactions()?
            .call()
            .await
            .map_err(|e| {
                error!("Error fetching transactions: {}", e);
                BridgeError::ContractError(format!("Failed to fetch transactions: {}", e))
            })?;

        debug!("Fetched {} transaction(s)", raw.len());
        raw.into_iter().map(decode_transfer).collect()
    }

    async fn transfer_count(&self) -> Result<U256, BridgeError> {
        self.contract
            .get_transaction_count()?
            .call()
            .await
            .map_err(|e| {
                error!("Error checking transactions: {}", e);
                BridgeError::ContractError(format!("Failed to get transaction count: {}", e))
            })
    }

    async fn add_to_blockchain(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<H256, BridgeError> {
        let call = self
            .contract
            .add_to_blockchain(receiver, amount, message.to_string(), keyword.to_string())?
            .from(from);

        let pending_tx = call.send().await.map_err(|e| {
            error!("Error sending transaction: {}", e);
            BridgeError::ContractError(format!("Failed to add transaction: {}", e))
        })?;

        let tx_hash = pending_tx.tx_hash();
        debug!("Append call {:?} pending", tx_hash);
        Ok(tx_hash)
    }

    async fn wait_for(&self, tx_hash: H256) -> Result<(), BridgeError> {
        // Wait for the transaction to be mined
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .confirmations(self.confirmations)
            .await
            .map_err(|e| BridgeError::TransactionError(format!("Transaction failed: {}", e)))?
            .ok_or_else(|| {
                BridgeError::TransactionError("Transaction receipt not found".to_string())
            })?;

        if receipt.status == Some(0u64.into()) {
            error!("Transaction {:?} reverted", tx_hash);
            return Err(BridgeError::TransactionError(format!(
                "Transaction {:?} reverted",
                tx_hash
            )));
        }

        debug!("Append call {:?} mined in block {:?}", tx_hash, receipt.block_number);
        Ok(())
    }
}
