use {
    crate::{config::SolSenderConfig, network::SolanaNetwork, wallet::Connection},
    anyhow::Context,
    async_trait::async_trait,
    log::{debug, warn},
    solana_commitment_config::CommitmentConfig,
    solana_hash::Hash,
    solana_pubkey::Pubkey,
    solana_rpc_client::nonblocking::rpc_client::RpcClient,
    solana_rpc_client_api::{
        client_error::{Error as ClientError, ErrorKind as ClientErrorKind},
        request::RpcError,
    },
    solana_signature::Signature,
    solana_transaction::Transaction,
};

/// [`Connection`] backed by the nonblocking RPC client.
pub struct RpcConnection {
    rpc_client: RpcClient,
}

impl RpcConnection {
    pub fn new(rpc_url: String, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_url, commitment),
        }
    }

    pub fn from_config(config: &SolSenderConfig, network: SolanaNetwork) -> Self {
        Self::new(
            config.rpc_url_for(network),
            CommitmentConfig {
                commitment: config.commitment_level,
            },
        )
    }
}

/// The client bounds the confirmation wait itself and reports running out of
/// time as a user-facing RPC error.
fn is_confirmation_timeout(err: &ClientError) -> bool {
    matches!(err.kind(), ClientErrorKind::RpcError(RpcError::ForUser(_)))
}

#[async_trait]
impl Connection for RpcConnection {
    async fn get_balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64> {
        self.rpc_client
            .get_balance(pubkey)
            .await
            .with_context(|| format!("Failed to fetch balance of {pubkey}"))
    }

    async fn get_latest_blockhash(&self) -> anyhow::Result<Hash> {
        self.rpc_client
            .get_latest_blockhash()
            .await
            .context("Failed to get recent blockhash. Check your RPC connection.")
    }

    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        let signature = self.rpc_client.send_transaction(transaction).await?;
        debug!("submitted {signature} to {}", self.rpc_client.url());
        Ok(signature)
    }

    async fn confirm_transaction(&self, signature: &Signature) -> anyhow::Result<bool> {
        let commitment = self.rpc_client.commitment();

        match self
            .rpc_client
            .poll_for_signature_with_commitment(signature, commitment)
            .await
        {
            Ok(()) => {}
            Err(err) if is_confirmation_timeout(&err) => {
                warn!("gave up waiting for {signature}: {err}");
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        }

        let confirmed = self
            .rpc_client
            .confirm_transaction_with_commitment(signature, commitment)
            .await?
            .value;

        Ok(confirmed)
    }
}
