use std::time::Duration;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const SOL_SENDER_CONFIG_RELATIVE_PATH: &str = ".config/sol-sender.toml";
pub const DEFAULT_KEYPAIR_RELATIVE_PATH: &str = ".config/solana/id.json";

pub const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";
pub const DEVNET_RPC: &str = "https://api.devnet.solana.com";

pub const EXPLORER_BASE_URL: &str = "https://explorer.solana.com";

/// How long a transaction result stays on screen after a send.
pub const RESULT_DISPLAY_WINDOW: Duration = Duration::from_secs(15);

/// Rendered in place of the balance when the fetch failed.
pub const BALANCE_PLACEHOLDER: &str = "---";
