//! Core data model for the LedgerLogic transfer front end.
//!
//! This crate provides the records decoded from the transfer contract, the
//! form and session state held by the client, and the conversions between
//! the display denomination and the contract's base unit.

pub mod display;
pub mod errors;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use display::{explorer_address_url, shorten_address};
pub use errors::CoreError;
pub use types::{FormField, FormState, SessionState, TransferRecord, TRANSFER_COUNT_KEY};
pub use units::{format_amount, parse_amount};
