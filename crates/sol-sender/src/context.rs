use {
    crate::{
        balance::sync_balance,
        config::SolSenderConfig,
        network::SolanaNetwork,
        notify::{ConsoleNotifier, Notification, Notifier},
        send::{SendFlow, SendOutcome},
        state::{AppState, WalletBalance},
        ui::show_spinner,
        wallet::{KeypairWallet, RpcConnection, WalletAdapter},
    },
    log::{info, warn},
    solana_pubkey::Pubkey,
    std::path::Path,
};

pub fn network_notification(network: SolanaNetwork) -> Notification {
    Notification::info(format!("App is using Solana {}", network.label()))
}

/// Owns the connection, the wallet and the app state for one session.
pub struct SolSenderContext {
    config: SolSenderConfig,
    connection: RpcConnection,
    wallet: KeypairWallet,
    state: AppState,
    notifier: ConsoleNotifier,
}

impl SolSenderContext {
    pub fn config(&self) -> &SolSenderConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn wallet(&self) -> &KeypairWallet {
        &self.wallet
    }

    pub fn pubkey(&self) -> Option<Pubkey> {
        self.wallet.public_key()
    }

    pub fn announce_network(&self) {
        self.notifier.notify(network_notification(self.state.network()));
    }

    pub fn switch_network(&mut self, network: SolanaNetwork) {
        if network == self.state.network() {
            return;
        }
        info!("switching to {}", network.as_str());
        self.connection = RpcConnection::from_config(&self.config, network);
        self.state.set_network(network);
        self.announce_network();
    }

    pub fn connect_wallet(&mut self, path: &Path) -> anyhow::Result<Pubkey> {
        let pubkey = self.wallet.connect(path)?;
        self.state.wallet_changed(true);
        Ok(pubkey)
    }

    pub fn disconnect_wallet(&mut self) {
        self.wallet.disconnect();
        self.state.wallet_changed(false);
    }

    pub fn refresh(&mut self) {
        self.state.refresh();
    }

    /// Runs the pending balance fetch, if there is one.
    pub async fn sync_balance(&mut self) -> Option<WalletBalance> {
        let wallet = self.wallet.public_key();
        show_spinner(
            "Fetching wallet balance…",
            sync_balance(&mut self.state, &self.connection, wallet),
        )
        .await
    }

    pub async fn send(&mut self, receiver_address: String, receiver_amount: String) -> SendOutcome {
        self.state.set_inputs(receiver_address, receiver_amount);
        let flow = SendFlow::new(&self.connection, &self.wallet, &self.notifier);
        flow.run(&mut self.state).await
    }
}

impl From<SolSenderConfig> for SolSenderContext {
    /// Tries the configured keypair right away. A missing or unreadable file
    /// just leaves the wallet disconnected.
    fn from(config: SolSenderConfig) -> Self {
        let connection = RpcConnection::from_config(&config, config.network);
        let mut state = AppState::new(config.network);

        let mut wallet = KeypairWallet::disconnected();
        match wallet.connect(&config.keypair_path) {
            Ok(pubkey) => {
                info!("connected wallet {pubkey}");
                state.wallet_changed(true);
            }
            Err(err) => warn!("starting without a wallet: {err:#}"),
        }

        Self {
            config,
            connection,
            wallet,
            state,
            notifier: ConsoleNotifier,
        }
    }
}
