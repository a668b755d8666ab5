//! Wallet and contract gateway for the LedgerLogic transfer front end.
//!
//! This crate wraps the wallet's JSON-RPC surface (account queries and value
//! transfers) and the deployed Transactions contract behind two traits, so
//! the client can be handed either the ethers-backed implementations or a
//! test double.

pub mod bindings;
pub mod errors;
pub mod extension;
pub mod ledger;
pub mod wallet;

pub use errors::BridgeError;
pub use extension::Extension;
pub use ledger::{ContractLedger, TransferLedger};
pub use wallet::{RpcWallet, WalletProvider, TRANSFER_GAS_LIMIT};
