//! Command line front end for the LedgerLogic transfer ledger.

use anyhow::Result;
use colored::Colorize;
use ledgerlogic_bridge::Extension;
use ledgerlogic_cli::commands::{self, send::SendArgs, ViewContext};
use ledgerlogic_cli::render::render_terminal;
use ledgerlogic_cli::ClientConfig;
use ledgerlogic_client::{FileStorage, GiphyClient, Store};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the front end.
#[derive(Debug, StructOpt)]
#[structopt(name = "ledgerlogic", about = "Send and browse wallet-backed transfers")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint
    #[structopt(short, long)]
    wallet_url: Option<String>,

    /// Path to the storage file
    #[structopt(short, long, parse(from_os_str))]
    storage: Option<PathBuf>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the front end.
#[derive(Debug, StructOpt)]
enum Command {
    /// Show the session state
    #[structopt(name = "status")]
    Status,

    /// Connect the wallet and show the latest transfers
    #[structopt(name = "connect")]
    Connect,

    /// Show the latest transfers
    #[structopt(name = "list")]
    List {
        /// Read the contract again before rendering
        #[structopt(long)]
        refresh: bool,
    },

    /// Send a transfer and record it on the contract
    #[structopt(name = "send")]
    Send {
        /// Recipient address
        #[structopt(long)]
        to: String,

        /// Amount in ETH
        #[structopt(long)]
        amount: String,

        /// Keyword for the card image
        #[structopt(long, default_value = "")]
        keyword: String,

        /// Message attached to the transfer
        #[structopt(long, default_value = "")]
        message: String,
    },

    /// Render the transfer page as HTML
    #[structopt(name = "page")]
    Page {
        /// File to write the page to
        #[structopt(short, long, parse(from_os_str))]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    // Override from flags and environment
    if let Some(url) = opt.wallet_url {
        config.wallet_url = Some(url);
    }
    if let Some(path) = opt.storage {
        config.storage_path = Some(path);
    }
    if config.giphy_api_key.is_none() {
        config.giphy_api_key = std::env::var("GIPHY_API_KEY").ok();
    }

    // Connect the wallet capability, if any
    let extension = match &config.wallet_url {
        Some(url) => Some(Extension::connect_rpc(
            url,
            config.contract_address()?,
            config.confirmations,
        )?),
        None => {
            warn!("No wallet endpoint configured");
            None
        }
    };

    let storage_path = config.storage_path();
    debug!("Using storage at {}", storage_path.display());
    let store = Store::new(extension, FileStorage::new(storage_path));

    // Startup checks; failures are already logged and leave the state as is
    if let Err(e) = store.initialize().await {
        debug!("Initialization incomplete: {}", e);
    }

    let mut ctx = ViewContext::new(config.explorer_url.clone());
    if let Some(key) = &config.giphy_api_key {
        ctx = ctx.with_images(Box::new(GiphyClient::new(key.clone())));
    }

    // Run the appropriate command
    match opt.cmd {
        Command::Status => {
            let session = commands::status::run(&store);
            match session.connected_account {
                Some(account) => println!("{} {:?}", "Account:".green(), account),
                None => println!("{} {}", "Account:".green(), "not connected".yellow()),
            }
            println!(
                "{} {}",
                "Transactions:".green(),
                session.cached_transfer_count.as_deref().unwrap_or("unknown")
            );
            if session.is_submitting {
                println!("{}", "A transfer is waiting to be mined".yellow());
            }
        }
        Command::Connect => {
            let view = commands::connect::run(&store, &ctx).await?;
            print!("{}", render_terminal(&view));
        }
        Command::List { refresh } => {
            let view = commands::list::run(&store, &ctx, refresh).await?;
            print!("{}", render_terminal(&view));
        }
        Command::Send {
            to,
            amount,
            keyword,
            message,
        } => {
            let args = SendArgs {
                to,
                amount,
                keyword,
                message,
            };
            let tx_hash = commands::send::run(&store, &args).await?;
            println!("{} {:?}", "Transfer recorded:".green(), tx_hash);

            let view = commands::list::run(&store, &ctx, false).await?;
            print!("{}", render_terminal(&view));
        }
        Command::Page { out } => {
            let page = commands::page::run(&store, &ctx, out.as_deref()).await?;
            if out.is_none() {
                print!("{}", page);
            }
        }
    }

    Ok(())
}
