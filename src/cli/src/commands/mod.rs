//! Commands for the command line front end.

pub mod connect;
pub mod list;
pub mod page;
pub mod send;
pub mod status;

use ledgerlogic_client::{
    images::resolve_images, CountStorage, KeywordImages, Store, TransactionsView, ViewOptions,
};
use std::collections::HashMap;

/// Rendering inputs shared by the commands that show the transfer list.
pub struct ViewContext {
    /// Block explorer base URL
    pub explorer_url: String,
    /// Card image source, if configured
    pub images: Option<Box<dyn KeywordImages>>,
}

impl ViewContext {
    /// Creates a context without card images.
    pub fn new(explorer_url: impl Into<String>) -> Self {
        Self {
            explorer_url: explorer_url.into(),
            images: None,
        }
    }

    /// Attaches a card image source.
    pub fn with_images(mut self, images: Box<dyn KeywordImages>) -> Self {
        self.images = Some(images);
        self
    }
}

/// Builds the transfer view from the store's current state.
pub async fn build_view<S: CountStorage>(store: &Store<S>, ctx: &ViewContext) -> TransactionsView {
    let state = store.snapshot();

    let images = match &ctx.images {
        Some(source) if state.session.is_connected() => {
            resolve_images(source.as_ref(), &state.transfers).await
        }
        _ => HashMap::new(),
    };

    let options = ViewOptions {
        explorer_url: ctx.explorer_url.clone(),
        images,
    };
    TransactionsView::from_state(&state, &options)
}
