//! Seams to the chain. [`Connection`] is the RPC handle and
//! [`WalletAdapter`] is whatever holds the signing key. The send flow only
//! ever sees these two traits.

use {
    async_trait::async_trait, solana_hash::Hash, solana_pubkey::Pubkey,
    solana_signature::Signature, solana_transaction::Transaction,
};

pub mod keypair;
pub mod rpc;

pub use {keypair::KeypairWallet, rpc::RpcConnection};

#[async_trait]
pub trait Connection: Send + Sync {
    /// Balance in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64>;

    async fn get_latest_blockhash(&self) -> anyhow::Result<Hash>;

    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature>;

    /// Waits for the signature to reach the connection's commitment.
    /// Running out of time is `Ok(false)`, not an error.
    async fn confirm_transaction(&self, signature: &Signature) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// `None` while no wallet is connected.
    fn public_key(&self) -> Option<Pubkey>;

    /// Signs `transaction` and submits it through `connection`.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        connection: &dyn Connection,
    ) -> anyhow::Result<Signature>;
}
