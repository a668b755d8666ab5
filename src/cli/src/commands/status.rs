//! Status command for the command line front end.

use ledgerlogic_client::{CountStorage, Store};
use ledgerlogic_core::SessionState;

/// Runs the status command.
pub fn run<S: CountStorage>(store: &Store<S>) -> SessionState {
    store.snapshot().session
}
