use {
    crate::{
        misc::helpers::read_keypair_from_path,
        wallet::{Connection, WalletAdapter},
    },
    async_trait::async_trait,
    solana_keypair::{Keypair, Signer},
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_transaction::Transaction,
    std::path::{Path, PathBuf},
};

/// Wallet backed by a keypair file on disk.
#[derive(Default)]
pub struct KeypairWallet {
    keypair: Option<Keypair>,
    keypair_path: Option<PathBuf>,
}

impl KeypairWallet {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            keypair: Some(keypair),
            keypair_path: None,
        }
    }

    /// Loads the keypair at `path`, replacing any previously connected one.
    pub fn connect(&mut self, path: &Path) -> anyhow::Result<Pubkey> {
        let keypair = read_keypair_from_path(path)?;
        let pubkey = keypair.pubkey();
        self.keypair = Some(keypair);
        self.keypair_path = Some(path.to_path_buf());
        Ok(pubkey)
    }

    pub fn disconnect(&mut self) {
        self.keypair = None;
        self.keypair_path = None;
    }

    pub fn keypair_path(&self) -> Option<&Path> {
        self.keypair_path.as_deref()
    }
}

#[async_trait]
impl WalletAdapter for KeypairWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|keypair| keypair.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        connection: &dyn Connection,
    ) -> anyhow::Result<Signature> {
        let Some(keypair) = self.keypair.as_ref() else {
            anyhow::bail!("Wallet disconnected before signing");
        };

        let recent_blockhash = connection.get_latest_blockhash().await?;
        transaction.try_sign(&[keypair], recent_blockhash)?;

        connection.send_transaction(&transaction).await
    }
}
