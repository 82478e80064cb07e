//! Everything the screen shows, in one place.
//!
//! [`AppState`] is only ever mutated through `&mut self`, so the interactive
//! loop is its single writer. Async results come back tagged with a
//! [`BalanceTicket`] and are dropped if a newer fetch has been started.

use {
    crate::{constants::RESULT_DISPLAY_WINDOW, network::SolanaNetwork},
    solana_signature::Signature,
    std::time::Instant,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalletBalance {
    /// Not fetched yet, or a fetch is in flight.
    Loading,
    /// In SOL.
    Known(f64),
    /// The last fetch failed.
    Unavailable,
}

impl WalletBalance {
    pub fn known(&self) -> Option<f64> {
        match self {
            WalletBalance::Known(sol) => Some(*sol),
            WalletBalance::Loading | WalletBalance::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    Validating,
    Submitting,
    Confirming,
}

/// Raw text of the two send inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferInputs {
    pub receiver_address: String,
    pub receiver_amount: String,
}

impl TransferInputs {
    pub fn is_empty(&self) -> bool {
        self.receiver_address.is_empty() && self.receiver_amount.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    pub message: String,
    pub link: String,
    pub signature: Signature,
    expires_at: Instant,
}

impl TransactionResult {
    pub fn new(network: SolanaNetwork, signature: Signature, now: Instant) -> Self {
        Self {
            message: "You can view your transaction on the Solana Explorer at:\n".to_string(),
            link: network.explorer_url(signature),
            signature,
            expires_at: now + RESULT_DISPLAY_WINDOW,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Generation of a balance fetch. Only the newest one may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceTicket(u64);

impl BalanceTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct AppState {
    network: SolanaNetwork,
    balance: WalletBalance,
    refresh_count: u64,
    fetch_generation: u64,
    pending_fetch: Option<BalanceTicket>,
    inputs: TransferInputs,
    phase: SendPhase,
    result: Option<TransactionResult>,
}

impl AppState {
    pub fn new(network: SolanaNetwork) -> Self {
        Self {
            network,
            balance: WalletBalance::Loading,
            refresh_count: 0,
            fetch_generation: 0,
            pending_fetch: None,
            inputs: TransferInputs::default(),
            phase: SendPhase::Idle,
            result: None,
        }
    }

    pub fn network(&self) -> SolanaNetwork {
        self.network
    }

    pub fn balance(&self) -> WalletBalance {
        self.balance
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn inputs(&self) -> &TransferInputs {
        &self.inputs
    }

    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    /// A send is in flight and the send action should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase != SendPhase::Idle
    }

    pub fn set_inputs(&mut self, receiver_address: String, receiver_amount: String) {
        self.inputs = TransferInputs {
            receiver_address,
            receiver_amount,
        };
    }

    pub fn reset_inputs(&mut self) {
        self.inputs = TransferInputs::default();
    }

    pub(crate) fn set_phase(&mut self, phase: SendPhase) {
        self.phase = phase;
    }

    /// Switches cluster. The caller reconnects and fetches the balance with
    /// the returned ticket.
    pub fn set_network(&mut self, network: SolanaNetwork) -> BalanceTicket {
        self.network = network;
        self.begin_balance_fetch()
    }

    /// Clears the inputs and asks for a fresh balance.
    pub fn refresh(&mut self) -> BalanceTicket {
        self.reset_inputs();
        self.refresh_count += 1;
        self.begin_balance_fetch()
    }

    /// Called when the wallet identity changes. A disconnected wallet has
    /// nothing to fetch.
    pub fn wallet_changed(&mut self, connected: bool) -> Option<BalanceTicket> {
        if connected {
            return Some(self.begin_balance_fetch());
        }
        self.fetch_generation += 1;
        self.pending_fetch = None;
        self.balance = WalletBalance::Loading;
        None
    }

    fn begin_balance_fetch(&mut self) -> BalanceTicket {
        self.fetch_generation += 1;
        let ticket = BalanceTicket(self.fetch_generation);
        self.balance = WalletBalance::Loading;
        self.pending_fetch = Some(ticket);
        ticket
    }

    /// Hands out the fetch that still has to be run, if any.
    pub fn take_pending_fetch(&mut self) -> Option<BalanceTicket> {
        self.pending_fetch.take()
    }

    pub fn is_current(&self, ticket: BalanceTicket) -> bool {
        ticket.0 == self.fetch_generation
    }

    /// Records a balance result. Returns `false` when the ticket is stale and
    /// the result was dropped.
    pub fn apply_balance(&mut self, ticket: BalanceTicket, balance: WalletBalance) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.balance = balance;
        true
    }

    pub fn store_result(&mut self, result: TransactionResult) {
        self.result = Some(result);
    }

    /// The last transaction result, unless its display window has passed.
    /// An expired result is cleared.
    pub fn visible_result(&mut self, now: Instant) -> Option<&TransactionResult> {
        if self.result.as_ref().is_some_and(|result| result.is_expired(now)) {
            self.result = None;
        }
        self.result.as_ref()
    }
}
