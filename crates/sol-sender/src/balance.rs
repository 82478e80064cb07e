use {
    crate::{
        misc::helpers::lamports_to_sol,
        state::{AppState, BalanceTicket, WalletBalance},
        wallet::Connection,
    },
    log::{debug, error},
    solana_pubkey::Pubkey,
};

/// Balance of `pubkey` in SOL.
pub async fn fetch_balance(connection: &dyn Connection, pubkey: &Pubkey) -> anyhow::Result<f64> {
    let lamports = connection.get_balance(pubkey).await?;
    Ok(lamports_to_sol(lamports))
}

/// Runs one fetch for `ticket` and writes the outcome into `state`. A failed
/// fetch leaves the placeholder and is not retried.
pub async fn fetch_into_state(
    state: &mut AppState,
    ticket: BalanceTicket,
    connection: &dyn Connection,
    pubkey: &Pubkey,
) -> WalletBalance {
    let balance = match fetch_balance(connection, pubkey).await {
        Ok(sol) => WalletBalance::Known(sol),
        Err(err) => {
            error!("Error in fetching wallet balance => {err:#}");
            WalletBalance::Unavailable
        }
    };

    if !state.apply_balance(ticket, balance) {
        debug!(
            "dropping balance for stale fetch #{}",
            ticket.generation()
        );
    }

    state.balance()
}

/// Runs whatever fetch the state is waiting on. Nothing happens without a
/// connected wallet or a pending ticket.
pub async fn sync_balance(
    state: &mut AppState,
    connection: &dyn Connection,
    wallet: Option<Pubkey>,
) -> Option<WalletBalance> {
    let pubkey = wallet?;
    let ticket = state.take_pending_fetch()?;
    Some(fetch_into_state(state, ticket, connection, &pubkey).await)
}
