//! Core types for the LedgerLogic transfer front end.

use crate::errors::CoreError;
use crate::units::format_amount;
use chrono::{DateTime, Local, Utc};
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the last known record count.
pub const TRANSFER_COUNT_KEY: &str = "transactionCount";

/// One historical transfer entry, as exposed by the contract's read interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// The account that submitted the transfer
    pub sender: Address,
    /// The account that received the value
    pub receiver: Address,
    /// Block time of the append call, in unix seconds
    pub timestamp: u64,
    /// Free-form message attached by the sender
    pub message: String,
    /// Keyword used to pick the card image
    pub keyword: String,
    /// Amount in the contract's base unit (wei)
    pub amount: U256,
}

impl TransferRecord {
    /// Creates a new transfer record.
    pub fn new(
        sender: Address,
        receiver: Address,
        timestamp: u64,
        message: impl Into<String>,
        keyword: impl Into<String>,
        amount: U256,
    ) -> Self {
        Self {
            sender,
            receiver,
            timestamp,
            message: message.into(),
            keyword: keyword.into(),
            amount,
        }
    }

    /// Returns the amount in the display denomination.
    pub fn amount_in_native_units(&self) -> String {
        format_amount(self.amount)
    }

    /// Returns the timestamp as a UTC date, if it is representable.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.timestamp).ok()?;
        DateTime::<Utc>::from_timestamp(secs, 0)
    }

    /// Returns the timestamp formatted in the local time zone.
    pub fn local_time(&self) -> Option<String> {
        self.datetime().map(|dt| {
            dt.with_timezone(&Local)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string()
        })
    }
}

/// The inputs of the transfer form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Receiver address
    Receiver,
    /// Amount in the display denomination
    Amount,
    /// Image keyword
    Keyword,
    /// Message
    Message,
}

impl FormField {
    /// Returns the field's input name.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Receiver => "addressTo",
            FormField::Amount => "amount",
            FormField::Keyword => "keyword",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addressTo" | "receiver" => Ok(FormField::Receiver),
            "amount" => Ok(FormField::Amount),
            "keyword" => Ok(FormField::Keyword),
            "message" => Ok(FormField::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// Mutable input buffer behind the transfer form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Receiver address as typed
    pub receiver: String,
    /// Amount in the display denomination, as typed
    pub amount: String,
    /// Image keyword
    pub keyword: String,
    /// Message
    pub message: String,
}

impl FormState {
    /// Replaces the value of one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Receiver => self.receiver = value,
            FormField::Amount => self.amount = value,
            FormField::Keyword => self.keyword = value,
            FormField::Message => self.message = value,
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Receiver => &self.receiver,
            FormField::Amount => &self.amount,
            FormField::Keyword => &self.keyword,
            FormField::Message => &self.message,
        }
    }

    /// Parses the receiver field as an address.
    pub fn receiver_address(&self) -> Result<Address, CoreError> {
        Address::from_str(self.receiver.trim())
            .map_err(|e| CoreError::InvalidAddress(format!("{}: {}", self.receiver, e)))
    }
}

/// Session-level state of the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The linked account, empty until a wallet connection succeeds
    pub connected_account: Option<Address>,
    /// Whether a submission is waiting to be mined
    pub is_submitting: bool,
    /// Last known record count, kept as a cross-reload hint
    pub cached_transfer_count: Option<String>,
}

impl SessionState {
    /// Creates a session seeded with a cached record count.
    pub fn with_cached_count(count: Option<String>) -> Self {
        Self {
            cached_transfer_count: count,
            ..Self::default()
        }
    }

    /// Returns true once a wallet account is linked.
    pub fn is_connected(&self) -> bool {
        self.connected_account.is_some()
    }
}
