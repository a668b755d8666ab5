//! Tests for the bridge crate against a local dev node.

use ethers::types::{Address, U256};
use ledgerlogic_bridge::{Extension, RpcWallet, WalletProvider};
use serial_test::serial;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const NODE_URL: &str = "http://localhost:8545";
const CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Tests that wallet failures reach the installed subscriber.
#[test]
#[serial]
fn test_wallet_failure_is_logged() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    // Nothing listens on port 1.
    let wallet = RpcWallet::from_url("http://127.0.0.1:1").unwrap();
    let rt = Runtime::new().unwrap();
    let result = tracing::subscriber::with_default(subscriber, || {
        rt.block_on(wallet.accounts())
    });

    assert!(result.is_err());
    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Wallet request eth_accounts failed"), "{}", output);
}

/// Tests the wallet account query.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node
fn test_wallet_accounts() {
    let rt = Runtime::new().unwrap();
    let wallet = RpcWallet::from_url(NODE_URL).unwrap();

    rt.block_on(async {
        let accounts = wallet.accounts().await.unwrap();
        assert!(!accounts.is_empty());

        let requested = wallet.request_accounts().await.unwrap();
        assert_eq!(requested.first(), accounts.first());
    });
}

/// Tests a full submission against a deployed Transactions contract.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node with the contract deployed
fn test_contract_roundtrip() {
    let rt = Runtime::new().unwrap();
    let extension = Extension::connect_rpc(
        NODE_URL,
        Address::from_str(CONTRACT_ADDRESS).unwrap(),
        1,
    )
    .unwrap();

    rt.block_on(async {
        let from = extension.wallet.accounts().await.unwrap()[0];
        let to = Address::from([0x42; 20]);
        let before = extension.ledger.transfer_count().await.unwrap();

        extension
            .wallet
            .send_transaction(from, to, U256::exp10(15))
            .await
            .unwrap();
        let tx_hash = extension
            .ledger
            .add_to_blockchain(from, to, U256::exp10(15), "integration", "test")
            .await
            .unwrap();
        extension.ledger.wait_for(tx_hash).await.unwrap();

        let after = extension.ledger.transfer_count().await.unwrap();
        assert_eq!(after, before + 1);

        let transfers = extension.ledger.all_transfers().await.unwrap();
        let newest = transfers.last().unwrap();
        assert_eq!(newest.sender, from);
        assert_eq!(newest.receiver, to);
        assert_eq!(newest.message, "integration");
    });
}
