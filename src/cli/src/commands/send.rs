//! Send command for the command line front end.

use crate::errors::CliError;
use colored::Colorize;
use ethers::types::H256;
use ledgerlogic_client::{CountStorage, Store};
use ledgerlogic_core::FormField;
use tracing::{debug, info};

/// The transfer to submit, as entered on the command line.
#[derive(Debug, Clone, Default)]
pub struct SendArgs {
    pub to: String,
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

/// Runs the send command.
pub async fn run<S: CountStorage>(store: &Store<S>, args: &SendArgs) -> Result<H256, CliError> {
    store.handle_change(FormField::Receiver, args.to.as_str());
    store.handle_change(FormField::Amount, args.amount.as_str());
    store.handle_change(FormField::Keyword, args.keyword.as_str());
    store.handle_change(FormField::Message, args.message.as_str());

    // Report the submitting flag as it changes.
    let mut updates = store.subscribe();
    let watcher = tokio::spawn(async move {
        let mut submitting = false;
        while updates.changed().await.is_ok() {
            let now = updates.borrow_and_update().session.is_submitting;
            if now && !submitting {
                println!("{}", "Waiting for the transfer to be mined...".yellow());
            }
            submitting = now;
        }
    });

    info!("Sending {} ETH to {}", args.amount, args.to);
    let result = store.send_transaction().await;
    watcher.abort();

    let tx_hash = result?;
    debug!("Transfer recorded in {:?}", tx_hash);
    Ok(tx_hash)
}
