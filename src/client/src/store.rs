//! The session store behind the transfer page.

use crate::errors::ClientError;
use crate::state::{Action, AppState};
use crate::storage::CountStorage;
use ethers::types::H256;
use ledgerlogic_bridge::{BridgeError, Extension};
use ledgerlogic_core::{parse_amount, FormField, TransferRecord, TRANSFER_COUNT_KEY};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Holds the client state and performs the wallet and contract actions.
pub struct Store<S: CountStorage> {
    /// The wallet capability, absent when no wallet is installed
    extension: Option<Extension>,
    /// Cross-reload hints
    storage: S,
    /// Current state, published to subscribers
    state: watch::Sender<AppState>,
}

/// Logs a failed operation under `context` and hands the result back.
fn logged<T>(context: &str, result: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(e) = &result {
        error!("{}: {}", context, e);
    }
    result
}

impl<S: CountStorage> Store<S> {
    /// Creates a store. The cached record count is read from `storage`.
    pub fn new(extension: Option<Extension>, storage: S) -> Self {
        let cached = match storage.get(TRANSFER_COUNT_KEY) {
            Ok(count) => count,
            Err(e) => {
                warn!("Failed to read cached transaction count: {}", e);
                None
            }
        };
        let (state, _) = watch::channel(AppState::new(cached));

        Self {
            extension,
            storage,
            state,
        }
    }

    /// Returns a receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn dispatch(&self, action: Action) {
        debug!("Dispatching {:?}", action);
        self.state
            .send_modify(|state| *state = std::mem::take(state).apply(action));
    }

    fn extension(&self) -> Result<&Extension, ClientError> {
        self.extension
            .as_ref()
            .ok_or(ClientError::Bridge(BridgeError::ExtensionUnavailable))
    }

    /// Runs the startup checks once: the wallet connection and the record count.
    ///
    /// Both checks run even if the first fails; the first error is returned.
    pub async fn initialize(&self) -> Result<(), ClientError> {
        let connected = self.check_if_wallet_is_connected().await;
        let counted = self.check_if_transactions_exist().await;
        connected.and(counted)
    }

    /// Adopts an already authorized account without prompting the wallet.
    pub async fn check_if_wallet_is_connected(&self) -> Result<(), ClientError> {
        logged(
            "Error checking wallet connection",
            self.try_check_wallet().await,
        )
    }

    /// Reads the record count from the contract and stores it as a hint.
    pub async fn check_if_transactions_exist(&self) -> Result<(), ClientError> {
        logged("Error checking transactions", self.try_check_count().await)
    }

    /// Asks the wallet for account access, then loads the transfer list.
    pub async fn connect_wallet(&self) -> Result<(), ClientError> {
        logged("Error connecting wallet", self.try_connect().await)
    }

    /// Reloads the transfer list from the contract.
    pub async fn refresh(&self) -> Result<Vec<TransferRecord>, ClientError> {
        logged("Error fetching transactions", self.try_refresh().await)
    }

    /// Updates one form input.
    pub fn handle_change(&self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::FormChanged(field, value.into()));
    }

    /// Submits the transfer described by the form.
    ///
    /// The value transfer goes through the wallet first, then the record is
    /// appended to the contract. The submitting flag is raised once the append
    /// is pending and lowered once it is mined; a failure while waiting leaves
    /// it raised.
    pub async fn send_transaction(&self) -> Result<H256, ClientError> {
        logged("Error sending transaction", self.try_send().await)
    }

    async fn try_check_wallet(&self) -> Result<(), ClientError> {
        let extension = self.extension()?;
        let accounts = extension.wallet.accounts().await?;

        match accounts.first() {
            Some(account) => {
                self.dispatch(Action::AccountConnected(*account));
                self.try_refresh().await?;
            }
            None => info!("No accounts found"),
        }
        Ok(())
    }

    async fn try_check_count(&self) -> Result<(), ClientError> {
        let extension = self.extension()?;
        let count = extension.ledger.transfer_count().await?;
        self.storage.set(TRANSFER_COUNT_KEY, &count.to_string())
    }

    async fn try_connect(&self) -> Result<(), ClientError> {
        let extension = self.extension()?;
        let accounts = extension.wallet.request_accounts().await?;
        let account = accounts.first().copied().ok_or_else(|| {
            BridgeError::WalletError("Wallet returned no accounts".to_string())
        })?;

        info!("Connected account {:?}", account);
        self.dispatch(Action::AccountConnected(account));
        self.try_refresh().await?;
        Ok(())
    }

    async fn try_refresh(&self) -> Result<Vec<TransferRecord>, ClientError> {
        let extension = self.extension()?;
        let transfers = extension.ledger.all_transfers().await?;
        self.dispatch(Action::TransfersLoaded(transfers.clone()));
        Ok(transfers)
    }

    async fn try_send(&self) -> Result<H256, ClientError> {
        let extension = self.extension()?;
        let state = self.snapshot();
        let form = state.form;

        let amount = parse_amount(&form.amount)?;
        let from = state.session.connected_account.ok_or(ClientError::NoAccount)?;
        let receiver = form.receiver_address()?;

        extension
            .wallet
            .send_transaction(from, receiver, amount)
            .await?;

        let tx_hash = extension
            .ledger
            .add_to_blockchain(from, receiver, amount, &form.message, &form.keyword)
            .await?;

        self.dispatch(Action::SubmitStarted);
        info!("Loading - {:?}", tx_hash);
        extension.ledger.wait_for(tx_hash).await?;
        info!("Success - {:?}", tx_hash);
        self.dispatch(Action::SubmitFinished);

        let count = extension.ledger.transfer_count().await?.to_string();
        self.dispatch(Action::TransferCountCached(count.clone()));
        self.storage.set(TRANSFER_COUNT_KEY, &count)?;

        self.try_refresh().await?;
        Ok(tx_hash)
    }
}
