/// Ethereum contract bindings for the Transactions contract.
use crate::errors::BridgeError;
use ethers::{
    abi::{Abi, Detokenize, Tokenize},
    contract::{Contract, ContractCall, EthAbiType},
    providers::Middleware,
    types::{Address, U256},
};
use std::sync::Arc;

/// One entry of `getAllTransactions()`, in the contract's field order.
#[derive(Clone, Debug, PartialEq, Eq, EthAbiType)]
pub struct TransferStruct {
    pub sender: Address,
    pub receiver: Address,
    pub amount: U256,
    pub message: String,
    pub timestamp: U256,
    pub keyword: String,
}

/// The Transactions contract interface
pub struct TransactionsContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> TransactionsContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, client: impl Into<Arc<M>>) -> Result<Self, BridgeError> {
        let abi = include_str!("../contracts/Transactions.abi");
        let abi = serde_json::from_str::<Abi>(abi).map_err(|e| BridgeError::AbiError(e.to_string()))?;
        let contract = Contract::new(address, abi, client.into());
        Ok(Self { contract })
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Reads every stored transfer
    pub fn get_all_transactions(&self) -> Result<ContractCall<M, Vec<TransferStruct>>, BridgeError> {
        self.method("getAllTransactions", ())
    }

    /// Reads the number of stored transfers
    pub fn get_transaction_count(&self) -> Result<ContractCall<M, U256>, BridgeError> {
        self.method("getTransactionCount", ())
    }

    /// Appends a transfer record
    pub fn add_to_blockchain(
        &self,
        receiver: Address,
        amount: U256,
        message: String,
        keyword: String,
    ) -> Result<ContractCall<M, ()>, BridgeError> {
        self.method("addToBlockchain", (receiver, amount, message, keyword))
    }

    fn method<T: Tokenize, D: Detokenize>(
        &self,
        name: &str,
        args: T,
    ) -> Result<ContractCall<M, D>, BridgeError> {
        self.contract
            .method(name, args)
            .map_err(|e| BridgeError::AbiError(format!("{}: {}", name, e)))
    }
}
