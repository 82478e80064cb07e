use {
    crate::{
        error::SendRejection,
        misc::{
            helpers::checked_sol_to_lamports,
            validation::{ValidatedTransfer, parse_amount_input, validate_transfer_request},
        },
        notify::{Notification, Notifier},
        state::{AppState, SendPhase, TransactionResult},
        wallet::{Connection, WalletAdapter},
    },
    log::{debug, error},
    solana_instruction::Instruction,
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_system_interface::instruction as system_instruction,
    solana_transaction::Transaction,
    std::time::Instant,
};

/// How a send attempt ended.
#[derive(Debug)]
pub enum SendOutcome {
    /// A guard refused the request. Nothing was sent.
    Rejected(SendRejection),
    Confirmed { signature: Signature, amount: f64 },
    /// Broadcast went through but confirmation could not be verified.
    Unconfirmed { signature: Signature },
    Failed(anyhow::Error),
}

impl SendOutcome {
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            SendOutcome::Confirmed { signature, .. } | SendOutcome::Unconfirmed { signature } => {
                Some(signature)
            }
            SendOutcome::Rejected(_) | SendOutcome::Failed(_) => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SendOutcome::Confirmed { .. })
    }
}

/// Unsigned single-transfer transaction with `from` as fee payer.
pub fn build_transfer_transaction(from: &Pubkey, to: &Pubkey, lamports: u64) -> Transaction {
    let instruction: Instruction = system_instruction::transfer(from, to, lamports);
    let message = Message::new(std::slice::from_ref(&instruction), Some(from));
    Transaction::new_unsigned(message)
}

/// One user-triggered "Send SOL" action.
pub struct SendFlow<'a> {
    connection: &'a dyn Connection,
    wallet: &'a dyn WalletAdapter,
    notifier: &'a dyn Notifier,
}

impl<'a> SendFlow<'a> {
    pub fn new(
        connection: &'a dyn Connection,
        wallet: &'a dyn WalletAdapter,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            connection,
            wallet,
            notifier,
        }
    }

    /// Sends the amount in `state`'s inputs to the address in its inputs.
    ///
    /// A rejected request leaves the inputs alone. Any attempt that got past
    /// the guards clears the inputs and schedules a balance refresh, whatever
    /// its result.
    pub async fn run(&self, state: &mut AppState) -> SendOutcome {
        state.set_phase(SendPhase::Validating);

        let transfer = match self.validate(state) {
            Ok(transfer) => transfer,
            Err(rejection) => {
                debug!("send rejected: {rejection}");
                self.notifier.notify(Notification::error(rejection.to_string()));
                state.set_phase(SendPhase::Idle);
                return SendOutcome::Rejected(rejection);
            }
        };

        let outcome = match self.submit_and_confirm(state, &transfer).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Something went wrong while sending SOL!"));
                error!("send SOL failed => {err:#}");
                SendOutcome::Failed(err)
            }
        };

        state.set_phase(SendPhase::Idle);
        state.refresh();

        outcome
    }

    fn validate(&self, state: &AppState) -> Result<ValidatedTransfer, SendRejection> {
        let inputs = state.inputs();
        validate_transfer_request(
            self.wallet.public_key(),
            &inputs.receiver_address,
            parse_amount_input(&inputs.receiver_amount),
            state.balance().known(),
        )
    }

    async fn submit_and_confirm(
        &self,
        state: &mut AppState,
        transfer: &ValidatedTransfer,
    ) -> anyhow::Result<SendOutcome> {
        let amount = transfer.amount_sol;

        state.set_phase(SendPhase::Submitting);
        self.notifier
            .notify(Notification::loading(format!("Sending {amount} SOL")));

        let lamports = checked_sol_to_lamports(amount)?;
        let transaction = build_transfer_transaction(&transfer.from, &transfer.to, lamports);

        let signature = self
            .wallet
            .send_transaction(transaction, self.connection)
            .await?;
        debug!("transfer of {lamports} lamports submitted as {signature}");

        state.set_phase(SendPhase::Confirming);
        let confirmed = self.connection.confirm_transaction(&signature).await?;

        let outcome = if confirmed {
            self.notifier
                .notify(Notification::success(format!("Sent {amount} SOL successfully!")));
            SendOutcome::Confirmed { signature, amount }
        } else {
            self.notifier.notify(Notification::error(
                "Couldn't confirm transaction! Please check on Solana Explorer",
            ));
            SendOutcome::Unconfirmed { signature }
        };

        state.store_result(TransactionResult::new(
            state.network(),
            signature,
            Instant::now(),
        ));

        Ok(outcome)
    }
}
