use {crate::error::SendRejection, solana_pubkey::Pubkey, std::str::FromStr};

pub fn is_valid_address(address: &str) -> bool {
    Pubkey::from_str(address).is_ok()
}

pub fn is_positive_within_balance(amount: f64, balance: Option<f64>) -> bool {
    amount > 0.0 && balance.is_none_or(|balance| amount <= balance)
}

/// Reads the amount field. Blank, unparseable and NaN input all count as
/// "nothing entered".
pub fn parse_amount_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|amount| !amount.is_nan())
}

/// A request that passed every guard and is ready to become a transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedTransfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount_sol: f64,
}

/// Runs the send guards in order and stops at the first failure.
///
/// A zero amount is reported as missing, not as non-positive. The balance
/// guard only applies when the balance is known.
pub fn validate_transfer_request(
    wallet: Option<Pubkey>,
    receiver_address: &str,
    receiver_amount: Option<f64>,
    known_balance: Option<f64>,
) -> Result<ValidatedTransfer, SendRejection> {
    let from = wallet.ok_or(SendRejection::WalletNotConnected)?;

    if receiver_address.is_empty() {
        return Err(SendRejection::MissingAddress);
    }

    let to = Pubkey::from_str(receiver_address).map_err(|_| SendRejection::InvalidAddress)?;

    let amount_sol = match receiver_amount {
        None => return Err(SendRejection::MissingAmount),
        Some(amount) if amount == 0.0 => return Err(SendRejection::MissingAmount),
        Some(amount) => amount,
    };

    if amount_sol <= 0.0 {
        return Err(SendRejection::NonPositiveAmount);
    }

    if !is_positive_within_balance(amount_sol, known_balance) {
        return Err(SendRejection::InsufficientBalance);
    }

    Ok(ValidatedTransfer {
        from,
        to,
        amount_sol,
    })
}
