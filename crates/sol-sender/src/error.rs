use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolSenderError {
    #[error("sol-sender config path doesnt exist")]
    ConfigPathDoesNotExist,
    #[error("Could not determine home directory. Please set the HOME environment variable.")]
    HomeDirectoryNotFound,
    #[error("Io error")]
    IoError(#[from] std::io::Error),
    #[error("Toml Parse error")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Anyhow err")]
    Anyhow(#[from] anyhow::Error),
}

/// Reasons a send request is refused before anything touches the network.
///
/// The `Display` text is what the user sees, so keep it stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejection {
    #[error("No wallet connected!")]
    WalletNotConnected,
    #[error("No receiver address entered!")]
    MissingAddress,
    #[error("Invalid receiver address!")]
    InvalidAddress,
    #[error("No receiver amount entered!")]
    MissingAmount,
    #[error("Invalid amount! Should be greater than 0")]
    NonPositiveAmount,
    #[error("Insufficient SOL balance")]
    InsufficientBalance,
}
