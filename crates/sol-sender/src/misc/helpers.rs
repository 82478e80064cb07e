use {
    crate::constants::LAMPORTS_PER_SOL,
    anyhow::{anyhow, bail},
    solana_keypair::{EncodableKey, Keypair},
    solana_pubkey::Pubkey,
    std::path::Path,
};

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Converts a SOL amount to lamports, refusing anything that would not
/// survive the trip into a `u64`.
pub fn checked_sol_to_lamports(amount_sol: f64) -> anyhow::Result<u64> {
    if !amount_sol.is_finite() {
        bail!("Amount must be a finite number. You entered: {amount_sol}");
    }

    let lamports_f64 = amount_sol * LAMPORTS_PER_SOL as f64;

    if lamports_f64 <= 0.0 {
        bail!("Amount must be positive. You entered: {amount_sol} SOL");
    }

    if lamports_f64 < 1.0 {
        bail!(
            "Amount too small. Must be at least 0.000000001 SOL (1 lamport). You entered: \
             {amount_sol} SOL"
        );
    }

    if lamports_f64 >= u64::MAX as f64 {
        bail!(
            "Amount too large. Maximum supported: {} SOL",
            lamports_to_sol(u64::MAX)
        );
    }

    Ok(lamports_f64.round() as u64)
}

pub fn read_keypair_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Keypair> {
    let path = path.as_ref();
    Keypair::read_from_file(path)
        .map_err(|e| anyhow!("Failed to read keypair from {}: {}", path.display(), e))
}

pub fn short_pubkey(pk: &Pubkey) -> String {
    let s = pk.to_string();
    let prefix = &s[..4];
    let suffix = &s[s.len() - 3..];
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol_exact_one_sol() {
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
    }

    #[test]
    fn test_checked_sol_to_lamports_whole_and_fractional() -> anyhow::Result<()> {
        assert_eq!(checked_sol_to_lamports(1.0)?, 1_000_000_000);
        assert_eq!(checked_sol_to_lamports(0.5)?, 500_000_000);
        assert_eq!(checked_sol_to_lamports(0.000000001)?, 1);
        Ok(())
    }

    #[test]
    fn test_checked_sol_to_lamports_rounds_float_noise() -> anyhow::Result<()> {
        // neither product is exact in f64
        assert_eq!(checked_sol_to_lamports(0.1)?, 100_000_000);
        assert_eq!(checked_sol_to_lamports(1.1)?, 1_100_000_000);
        Ok(())
    }

    #[test]
    fn test_checked_sol_to_lamports_rejects_bad_amounts() {
        assert!(checked_sol_to_lamports(0.0).is_err());
        assert!(checked_sol_to_lamports(-1.0).is_err());
        assert!(checked_sol_to_lamports(f64::NAN).is_err());
        assert!(checked_sol_to_lamports(f64::INFINITY).is_err());
        assert!(checked_sol_to_lamports(0.0000000001).is_err());
        assert!(checked_sol_to_lamports(1e12).is_err());
    }

    #[test]
    fn test_short_pubkey() {
        let pk = Pubkey::new_from_array([0u8; 32]);
        assert_eq!(short_pubkey(&pk), "1111...111");
    }
}
