//! Connect command for the command line front end.

use super::{build_view, ViewContext};
use crate::errors::CliError;
use ledgerlogic_client::{CountStorage, Store, TransactionsView};
use tracing::info;

/// Runs the connect command.
pub async fn run<S: CountStorage>(
    store: &Store<S>,
    ctx: &ViewContext,
) -> Result<TransactionsView, CliError> {
    store.connect_wallet().await?;
    info!(
        "Connected as {:?}",
        store.snapshot().session.connected_account
    );
    Ok(build_view(store, ctx).await)
}
