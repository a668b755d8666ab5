//! Terminal and page rendering of the transfer view.

use colored::Colorize;
use ledgerlogic_client::view::{
    TransactionsView, TransferCard, CONNECT_PROMPT, EMPTY_MESSAGE, LIST_HEADING, NATIVE_UNIT,
};
use std::fmt;

/// Renders the view for a terminal.
pub fn render_terminal(view: &TransactionsView) -> String {
    Terminal(view).to_string()
}

/// Terminal form of a view.
struct Terminal<'a>(&'a TransactionsView);

impl fmt::Display for Terminal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TransactionsView::ConnectPrompt => writeln!(f, "{}", CONNECT_PROMPT.yellow()),
            TransactionsView::Empty => {
                writeln!(f, "{}", LIST_HEADING.bold())?;
                writeln!(f, "{}", EMPTY_MESSAGE)
            }
            TransactionsView::Cards(cards) => {
                writeln!(f, "{}", LIST_HEADING.bold())?;
                for card in cards {
                    writeln!(f)?;
                    write_card(f, card)?;
                }
                Ok(())
            }
        }
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &TransferCard) -> fmt::Result {
    writeln!(f, "  {} {}", "From:".green(), card.from_short)?;
    writeln!(f, "  {} {}", "To:".green(), card.to_short)?;
    writeln!(f, "  {} {} {}", "Amount:".green(), card.amount, NATIVE_UNIT)?;
    if let Some(message) = &card.message {
        writeln!(f, "  {} {}", "Message:".green(), message)?;
    }
    if let Some(time) = &card.time {
        writeln!(f, "  {} {}", "Time:".green(), time)?;
    }
    if let Some(url) = &card.image_url {
        writeln!(f, "  {} {}", "Image:".green(), url)?;
    }
    Ok(())
}

/// Wraps the view in a standalone HTML page.
pub fn render_page(view: &TransactionsView) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>LedgerLogic</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        view.render_html()
    )
}
