//! Tests for the view layer driven through the store.

use crate::mocks::{address, extension, record, MockLedger, MockWallet};
use ethers::utils::to_checksum;
use ledgerlogic_client::view::{CONNECT_PROMPT, EMPTY_MESSAGE};
use ledgerlogic_client::{MemoryStorage, Store, TransactionsView, ViewOptions};
use ledgerlogic_core::shorten_address;

fn options() -> ViewOptions {
    ViewOptions {
        explorer_url: "https://sepolia.etherscan.io".to_string(),
        ..ViewOptions::default()
    }
}

#[tokio::test]
async fn test_prompt_until_connected() {
    let (ext, _, _) = extension(
        MockWallet::granting(address(1)),
        MockLedger::with_records(vec![record(1, 2, 10, 1)]),
    );
    let store = Store::new(Some(ext), MemoryStorage::new());
    store.initialize().await.unwrap();

    let view = TransactionsView::from_state(&store.snapshot(), &options());
    assert_eq!(view, TransactionsView::ConnectPrompt);
    let html = view.render_html();
    assert!(html.contains(CONNECT_PROMPT));
    assert!(!html.contains("From:"));

    store.connect_wallet().await.unwrap();
    let view = TransactionsView::from_state(&store.snapshot(), &options());
    assert!(matches!(view, TransactionsView::Cards(ref cards) if cards.len() == 1));
}

#[tokio::test]
async fn test_empty_message_for_connected_account() {
    let (ext, _, _) = extension(MockWallet::authorized(address(1)), MockLedger::default());
    let store = Store::new(Some(ext), MemoryStorage::new());
    store.initialize().await.unwrap();

    let view = TransactionsView::from_state(&store.snapshot(), &options());
    assert_eq!(view, TransactionsView::Empty);
    assert!(view.render_html().contains(EMPTY_MESSAGE));
}

#[tokio::test]
async fn test_records_render_newest_first() {
    let records: Vec<_> = (1..=5).map(|n| record(n, n + 10, n as u64 * 100, n as u64)).collect();
    let (ext, _, _) = extension(
        MockWallet::authorized(address(1)),
        MockLedger::with_records(records.clone()),
    );
    let store = Store::new(Some(ext), MemoryStorage::new());
    store.initialize().await.unwrap();

    let cards = match TransactionsView::from_state(&store.snapshot(), &options()) {
        TransactionsView::Cards(cards) => cards,
        other => panic!("unexpected view {:?}", other),
    };

    assert_eq!(cards.len(), records.len());
    for (card, record) in cards.iter().zip(records.iter().rev()) {
        let sender = to_checksum(&record.sender, None);
        assert_eq!(card.from, sender);
        assert_eq!(card.from_short, shorten_address(&sender));
        assert_eq!(card.from_short.len(), 12);
        assert!(card.from_url.ends_with(&sender));
    }

    // The rendered page keeps the same order.
    let html = TransactionsView::Cards(cards.clone()).render_html();
    let positions: Vec<_> = cards
        .iter()
        .map(|c| html.find(&c.from_short).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
