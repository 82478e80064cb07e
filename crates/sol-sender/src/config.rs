use {
    crate::{
        constants::{DEFAULT_KEYPAIR_RELATIVE_PATH, SOL_SENDER_CONFIG_RELATIVE_PATH},
        error::SolSenderError,
        network::SolanaNetwork,
    },
    serde::{Deserialize, Serialize},
    solana_commitment_config::CommitmentLevel,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

pub fn home_dir() -> Result<PathBuf, SolSenderError> {
    dirs::home_dir().ok_or(SolSenderError::HomeDirectoryNotFound)
}

pub fn sol_sender_config_path() -> Result<PathBuf, SolSenderError> {
    Ok(home_dir()?.join(SOL_SENDER_CONFIG_RELATIVE_PATH))
}

/// Expands a leading `~/` to the home directory. Anything else is returned
/// untouched, including a bare `~`.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SolSenderConfig {
    #[serde(default)]
    pub network: SolanaNetwork,
    pub commitment_level: CommitmentLevel,
    pub keypair_path: PathBuf,
    /// Endpoint for `network`. Any other network uses its public endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl Default for SolSenderConfig {
    fn default() -> Self {
        let keypair_path = dirs::home_dir()
            .map(|home| home.join(DEFAULT_KEYPAIR_RELATIVE_PATH))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYPAIR_RELATIVE_PATH));

        Self {
            network: SolanaNetwork::default(),
            commitment_level: CommitmentLevel::Confirmed,
            keypair_path,
            rpc_url: None,
        }
    }
}

impl SolSenderConfig {
    pub fn load() -> Result<SolSenderConfig, SolSenderError> {
        Self::load_from_path(&sol_sender_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<SolSenderConfig, SolSenderError> {
        if !path.exists() {
            return Err(SolSenderError::ConfigPathDoesNotExist);
        }
        let data = fs::read_to_string(path)?;
        let mut config: SolSenderConfig = toml::from_str(&data)?;
        config.keypair_path = expand_tilde(&config.keypair_path.to_string_lossy());
        Ok(config)
    }

    pub fn rpc_url_for(&self, network: SolanaNetwork) -> String {
        match &self.rpc_url {
            Some(url) if network == self.network => url.clone(),
            _ => network.default_rpc_url().to_string(),
        }
    }
}
