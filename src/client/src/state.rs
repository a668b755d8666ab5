//! Client state and its transitions.

use ethers::types::Address;
use ledgerlogic_core::{FormField, FormState, SessionState, TransferRecord};

/// Everything the view layer renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// The transfer form
    pub form: FormState,
    /// Connection and submission state
    pub session: SessionState,
    /// Records from the last successful read, in arrival order
    pub transfers: Vec<TransferRecord>,
}

/// A state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A form input changed.
    FormChanged(FormField, String),
    /// The wallet granted access to an account.
    AccountConnected(Address),
    /// A read of the contract succeeded.
    TransfersLoaded(Vec<TransferRecord>),
    /// An append transaction was submitted and is waiting to be mined.
    SubmitStarted,
    /// The append transaction was mined.
    SubmitFinished,
    /// A fresh record count was read from the contract.
    TransferCountCached(String),
}

impl AppState {
    /// Creates the initial state, seeded with the stored record count.
    pub fn new(cached_transfer_count: Option<String>) -> Self {
        Self {
            session: SessionState::with_cached_count(cached_transfer_count),
            ..Self::default()
        }
    }

    /// Applies one transition and returns the next state.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::FormChanged(field, value) => self.form.set(field, value),
            Action::AccountConnected(account) => self.session.connected_account = Some(account),
            Action::TransfersLoaded(transfers) => self.transfers = transfers,
            Action::SubmitStarted => self.session.is_submitting = true,
            Action::SubmitFinished => self.session.is_submitting = false,
            Action::TransferCountCached(count) => {
                self.session.cached_transfer_count = Some(count)
            }
        }
        self
    }
}
