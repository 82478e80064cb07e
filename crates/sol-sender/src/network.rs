use {
    crate::constants::{DEVNET_RPC, EXPLORER_BASE_URL, MAINNET_RPC},
    anyhow::bail,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Cluster the app talks to. The serialized form doubles as the explorer's
/// `cluster` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolanaNetwork {
    #[default]
    #[serde(rename = "mainnet-beta")]
    MainnetBeta,
    #[serde(rename = "devnet")]
    Devnet,
}

impl SolanaNetwork {
    pub const fn all() -> [SolanaNetwork; 2] {
        [SolanaNetwork::MainnetBeta, SolanaNetwork::Devnet]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SolanaNetwork::MainnetBeta => "mainnet-beta",
            SolanaNetwork::Devnet => "devnet",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            SolanaNetwork::MainnetBeta => "Mainnet",
            SolanaNetwork::Devnet => "Devnet",
        }
    }

    pub const fn default_rpc_url(&self) -> &'static str {
        match self {
            SolanaNetwork::MainnetBeta => MAINNET_RPC,
            SolanaNetwork::Devnet => DEVNET_RPC,
        }
    }

    pub const fn other(&self) -> SolanaNetwork {
        match self {
            SolanaNetwork::MainnetBeta => SolanaNetwork::Devnet,
            SolanaNetwork::Devnet => SolanaNetwork::MainnetBeta,
        }
    }

    pub fn explorer_url(&self, signature: impl fmt::Display) -> String {
        format!(
            "{EXPLORER_BASE_URL}/tx/{signature}?cluster={}",
            self.as_str()
        )
    }
}

impl fmt::Display for SolanaNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolanaNetwork {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(SolanaNetwork::MainnetBeta),
            "devnet" => Ok(SolanaNetwork::Devnet),
            other => bail!("Unknown network: {other}. Expected mainnet-beta or devnet"),
        }
    }
}
