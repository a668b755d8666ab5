//! Page command for the command line front end.

use super::{build_view, ViewContext};
use crate::errors::CliError;
use crate::render::render_page;
use ledgerlogic_client::{CountStorage, Store};
use std::path::Path;
use tracing::info;

/// Runs the page command. Writes the page to `out` when given and returns it.
pub async fn run<S: CountStorage>(
    store: &Store<S>,
    ctx: &ViewContext,
    out: Option<&Path>,
) -> Result<String, CliError> {
    let page = render_page(&build_view(store, ctx).await);

    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &page)?;
        info!("Page written to {}", path.display());
    }

    Ok(page)
}
