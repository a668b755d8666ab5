//! State store and view layer for the LedgerLogic transfer front end.
//!
//! The [`Store`] owns the session, form and transfer list, drives the wallet
//! and contract through an injected [`Extension`](ledgerlogic_bridge::Extension),
//! and publishes every state change to subscribers. The [`view`] module turns
//! a state snapshot into the transfer list page.

pub mod errors;
pub mod images;
pub mod state;
pub mod storage;
pub mod store;
pub mod view;

pub use errors::ClientError;
pub use images::{GiphyClient, KeywordImages};
pub use state::{Action, AppState};
pub use storage::{CountStorage, FileStorage, MemoryStorage};
pub use store::Store;
pub use view::{TransactionsView, TransferCard, ViewOptions};
