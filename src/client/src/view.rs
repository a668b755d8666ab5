//! The transfer list page.

use crate::state::AppState;
use ethers::utils::to_checksum;
use ledgerlogic_core::{explorer_address_url, shorten_address, TransferRecord};
use std::collections::HashMap;
use std::fmt;

/// Heading shown while no account is connected.
pub const CONNECT_PROMPT: &str = "Connect your account to see the latest transactions";
/// Heading above the card list.
pub const LIST_HEADING: &str = "Latest Transactions";
/// Text shown for a connected account with no records.
pub const EMPTY_MESSAGE: &str = "No transactions found";
/// Unit label appended to amounts.
pub const NATIVE_UNIT: &str = "ETH";

/// Rendering inputs that do not come from the store.
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    /// Block explorer base URL for address links
    pub explorer_url: String,
    /// Card images keyed by transfer keyword
    pub images: HashMap<String, String>,
}

/// One rendered transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferCard {
    pub from: String,
    pub from_short: String,
    pub from_url: String,
    pub to: String,
    pub to_short: String,
    pub to_url: String,
    /// Amount in the display denomination, without unit
    pub amount: String,
    pub message: Option<String>,
    pub time: Option<String>,
    pub image_url: Option<String>,
}

impl TransferCard {
    /// Builds the card for one record.
    pub fn from_record(record: &TransferRecord, options: &ViewOptions) -> Self {
        let from = to_checksum(&record.sender, None);
        let to = to_checksum(&record.receiver, None);

        Self {
            from_short: shorten_address(&from),
            from_url: explorer_address_url(&options.explorer_url, &from),
            to_short: shorten_address(&to),
            to_url: explorer_address_url(&options.explorer_url, &to),
            from,
            to,
            amount: record.amount_in_native_units(),
            message: Some(record.message.clone()).filter(|m| !m.is_empty()),
            time: record.local_time(),
            image_url: options.images.get(&record.keyword).cloned(),
        }
    }
}

/// What the transfer section shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionsView {
    /// No account is connected.
    ConnectPrompt,
    /// An account is connected but there are no records.
    Empty,
    /// Records, most recent first.
    Cards(Vec<TransferCard>),
}

impl TransactionsView {
    /// Derives the view from a state snapshot.
    pub fn from_state(state: &AppState, options: &ViewOptions) -> Self {
        if !state.session.is_connected() {
            return TransactionsView::ConnectPrompt;
        }
        if state.transfers.is_empty() {
            return TransactionsView::Empty;
        }

        TransactionsView::Cards(
            state
                .transfers
                .iter()
                .rev()
                .map(|record| TransferCard::from_record(record, options))
                .collect(),
        )
    }

    /// Renders the section as an HTML fragment.
    pub fn render_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransactionsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section class=\"transactions\">")?;

        match self {
            TransactionsView::ConnectPrompt => {
                writeln!(f, "  <h3>{}</h3>", CONNECT_PROMPT)?;
            }
            TransactionsView::Empty => {
                writeln!(f, "  <h3>{}</h3>", LIST_HEADING)?;
                writeln!(f, "  <p class=\"empty\">{}</p>", EMPTY_MESSAGE)?;
            }
            TransactionsView::Cards(cards) => {
                writeln!(f, "  <h3>{}</h3>", LIST_HEADING)?;
                writeln!(f, "  <div class=\"cards\">")?;
                for card in cards {
                    write_card(f, card)?;
                }
                writeln!(f, "  </div>")?;
            }
        }

        writeln!(f, "</section>")
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &TransferCard) -> fmt::Result {
    writeln!(f, "    <div class=\"card\">")?;
    writeln!(
        f,
        "      <a href=\"{}\" target=\"_blank\" rel=\"noreferrer\"><p>From: {}</p></a>",
        escape_html(&card.from_url),
        escape_html(&card.from_short)
    )?;
    writeln!(
        f,
        "      <a href=\"{}\" target=\"_blank\" rel=\"noreferrer\"><p>To: {}</p></a>",
        escape_html(&card.to_url),
        escape_html(&card.to_short)
    )?;
    writeln!(f, "      <p>Amount: {} {}</p>", card.amount, NATIVE_UNIT)?;
    if let Some(message) = &card.message {
        writeln!(f, "      <p>Message: {}</p>", escape_html(message))?;
    }
    if let Some(time) = &card.time {
        writeln!(f, "      <p class=\"time\">Time: {}</p>", escape_html(time))?;
    }
    if let Some(url) = &card.image_url {
        writeln!(
            f,
            "      <img src=\"{}\" alt=\"transaction gif\" />",
            escape_html(url)
        )?;
    }
    writeln!(f, "    </div>")
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
