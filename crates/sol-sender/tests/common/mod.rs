#![allow(dead_code)]

use {
    async_trait::async_trait,
    sol_sender::{
        notify::{Notification, Notifier},
        wallet::{Connection, WalletAdapter},
    },
    solana_hash::Hash,
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_transaction::Transaction,
    std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

pub fn receiver() -> Pubkey {
    Pubkey::new_from_array([5u8; 32])
}

pub fn sender_keypair() -> Keypair {
    Keypair::new_from_array([9u8; 32])
}

/// Scripted RPC endpoint that counts every call it receives.
pub struct MockConnection {
    pub balance_lamports: Option<u64>,
    pub confirms: bool,
    pub fail_send: bool,
    pub balance_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub confirm_calls: AtomicUsize,
    pub sent: Mutex<Vec<Transaction>>,
}

impl MockConnection {
    pub fn new(balance_lamports: Option<u64>) -> Self {
        Self {
            balance_lamports,
            confirms: true,
            fail_send: false,
            balance_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            confirm_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfirming(mut self) -> Self {
        self.confirms = false;
        self
    }

    pub fn failing_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    /// Calls that reach the network when sending: submit and confirm.
    pub fn send_path_calls(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst) + self.confirm_calls.load(Ordering::SeqCst)
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn get_balance(&self, _pubkey: &Pubkey) -> anyhow::Result<u64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.balance_lamports
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn get_latest_blockhash(&self) -> anyhow::Result<Hash> {
        Ok(Hash::new_from_array([3u8; 32]))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_send {
            anyhow::bail!("node is behind");
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(transaction.clone());
        }
        Ok(transaction.signatures[0])
    }

    async fn confirm_transaction(&self, _signature: &Signature) -> anyhow::Result<bool> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.confirms)
    }
}

/// Wallet whose user declines every signature request.
pub struct RejectingWallet(pub Pubkey);

#[async_trait]
impl WalletAdapter for RejectingWallet {
    fn public_key(&self) -> Option<Pubkey> {
        Some(self.0)
    }

    async fn send_transaction(
        &self,
        _transaction: Transaction,
        _connection: &dyn Connection,
    ) -> anyhow::Result<Signature> {
        anyhow::bail!("User rejected the request.")
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
