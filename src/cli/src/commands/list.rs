//! List command for the command line front end.

use super::{build_view, ViewContext};
use crate::errors::CliError;
use ledgerlogic_client::{CountStorage, Store, TransactionsView};

/// Runs the list command.
///
/// The list comes from the store's startup read; `refresh` forces another read.
pub async fn run<S: CountStorage>(
    store: &Store<S>,
    ctx: &ViewContext,
    refresh: bool,
) -> Result<TransactionsView, CliError> {
    if refresh && store.snapshot().session.is_connected() {
        store.refresh().await?;
    }
    Ok(build_view(store, ctx).await)
}
