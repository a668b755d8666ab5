//! In-memory wallet and contract used in place of a live chain.

use async_trait::async_trait;
use ethers::types::{Address, H256, U256};
use ledgerlogic_bridge::{BridgeError, Extension, TransferLedger, WalletProvider};
use ledgerlogic_core::TransferRecord;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A wallet holding a fixed set of accounts.
#[derive(Debug, Default)]
pub struct MockWallet {
    /// Accounts this client was already authorized for
    pub authorized: Mutex<Vec<Address>>,
    /// Accounts granted when access is requested
    pub grantable: Vec<Address>,
    /// Whether the user rejects every request
    pub reject: bool,
    /// Value transfers sent through the wallet
    pub sent: Mutex<Vec<(Address, Address, U256)>>,
}

impl MockWallet {
    /// A wallet that grants `account` on request.
    pub fn granting(account: Address) -> Self {
        Self {
            grantable: vec![account],
            ..Self::default()
        }
    }

    /// A wallet already authorized for `account`.
    pub fn authorized(account: Address) -> Self {
        Self {
            authorized: Mutex::new(vec![account]),
            grantable: vec![account],
            ..Self::default()
        }
    }

    /// A wallet whose user rejects every request.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(Address, Address, U256)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn accounts(&self) -> Result<Vec<Address>, BridgeError> {
        Ok(self.authorized.lock().unwrap().clone())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, BridgeError> {
        if self.reject {
            return Err(BridgeError::WalletError("User rejected the request.".to_string()));
        }
        *self.authorized.lock().unwrap() = self.grantable.clone();
        Ok(self.grantable.clone())
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<H256, BridgeError> {
        if self.reject {
            return Err(BridgeError::WalletError("User rejected the request.".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((from, to, value));
        Ok(H256::from_low_u64_be(sent.len() as u64))
    }
}

/// A contract that keeps its records in memory.
#[derive(Debug, Default)]
pub struct MockLedger {
    /// Mined records, in arrival order
    pub records: Mutex<Vec<TransferRecord>>,
    /// Appends waiting to be mined
    pub pending: Mutex<HashMap<H256, TransferRecord>>,
    /// Whether reads fail; can be switched while a store holds the ledger
    pub fail_reads: AtomicBool,
    /// Whether mining fails
    pub fail_mining: bool,
    /// Block time handed to the next mined record
    pub clock: Mutex<u64>,
}

impl MockLedger {
    /// A ledger preloaded with `records`.
    pub fn with_records(records: Vec<TransferRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            clock: Mutex::new(1_700_000_000),
            ..Self::default()
        }
    }

    /// Makes every following read fail, or succeed again.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<TransferRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferLedger for MockLedger {
    async fn all_transfers(&self) -> Result<Vec<TransferRecord>, BridgeError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(BridgeError::ContractError("call reverted".to_string()));
        }
        Ok(self.records())
    }

    async fn transfer_count(&self) -> Result<U256, BridgeError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(BridgeError::ContractError("call reverted".to_string()));
        }
        Ok(U256::from(self.records.lock().unwrap().len()))
    }

    async fn add_to_blockchain(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<H256, BridgeError> {
        let timestamp = {
            let mut clock = self.clock.lock().unwrap();
            *clock += 12;
            *clock
        };
        let record = TransferRecord::new(from, receiver, timestamp, message, keyword, amount);

        let mut pending = self.pending.lock().unwrap();
        let tx_hash = H256::from_low_u64_be(0x1000 + pending.len() as u64);
        pending.insert(tx_hash, record);
        Ok(tx_hash)
    }

    async fn wait_for(&self, tx_hash: H256) -> Result<(), BridgeError> {
        if self.fail_mining {
            return Err(BridgeError::TransactionError(
                "Transaction receipt not found".to_string(),
            ));
        }
        let record = self
            .pending
            .lock()
            .unwrap()
            .remove(&tx_hash)
            .ok_or_else(|| BridgeError::TransactionError(format!("Unknown {:?}", tx_hash)))?;
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

/// Bundles the doubles into an extension, keeping handles for assertions.
pub fn extension(wallet: MockWallet, ledger: MockLedger) -> (Extension, Arc<MockWallet>, Arc<MockLedger>) {
    let wallet = Arc::new(wallet);
    let ledger = Arc::new(ledger);
    let extension = Extension::new(wallet.clone(), ledger.clone());
    (extension, wallet, ledger)
}

/// A deterministic address for tests.
pub fn address(byte: u8) -> Address {
    Address::from([byte; 20])
}

/// A record from `from` to `to` of `amount` wei.
pub fn record(from: u8, to: u8, timestamp: u64, amount: u64) -> TransferRecord {
    TransferRecord::new(
        address(from),
        address(to),
        timestamp,
        format!("from {}", from),
        "gift",
        U256::from(amount),
    )
}
