/// Integration tests for configuration loading and parsing
use {
    sol_sender::{
        config::{SolSenderConfig, expand_tilde, sol_sender_config_path},
        error::SolSenderError,
        network::SolanaNetwork,
    },
    solana_commitment_config::CommitmentLevel,
    std::{fs, path::PathBuf},
    tempfile::TempDir,
};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join("sol-sender.toml");
    fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

// ============================================================================
// expand_tilde
// ============================================================================

#[test]
fn test_expand_tilde_with_path() {
    let Some(home) = dirs::home_dir() else {
        eprintln!("Skipping test: HOME not set");
        return;
    };
    assert_eq!(
        expand_tilde("~/.config/solana/id.json"),
        home.join(".config/solana/id.json")
    );
}

#[test]
fn test_expand_tilde_leaves_other_paths_alone() {
    for path in ["~", "/etc/config.toml", "./config.toml", "", "/home/user~/file.txt"] {
        assert_eq!(expand_tilde(path), PathBuf::from(path), "{path:?}");
    }
}

#[test]
fn test_sol_sender_config_path_structure() {
    let Ok(config_path) = sol_sender_config_path() else {
        eprintln!("Skipping test: HOME not set");
        return;
    };
    assert!(
        config_path.ends_with(".config/sol-sender.toml"),
        "got: {}",
        config_path.display()
    );
}

// ============================================================================
// SolSenderConfig loading
// ============================================================================

#[test]
fn test_load_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
network = "devnet"
keypair-path = "~/.config/solana/id.json"
commitment-level = "confirmed"
"#,
    );

    let config = SolSenderConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.network, SolanaNetwork::Devnet);
    assert_eq!(config.commitment_level, CommitmentLevel::Confirmed);
    assert_eq!(config.rpc_url, None);
    assert!(!config.keypair_path.to_string_lossy().starts_with('~'));
}

#[test]
fn test_network_defaults_to_mainnet() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
keypair-path = "/tmp/test.json"
commitment-level = "finalized"
"#,
    );

    let config = SolSenderConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.network, SolanaNetwork::MainnetBeta);
    assert_eq!(
        config.rpc_url_for(config.network),
        "https://api.mainnet-beta.solana.com"
    );
    assert_eq!(
        config.rpc_url_for(SolanaNetwork::Devnet),
        "https://api.devnet.solana.com"
    );
}

#[test]
fn test_rpc_url_override_only_applies_to_configured_network() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
network = "mainnet-beta"
rpc-url = "http://localhost:8899"
keypair-path = "/tmp/test.json"
commitment-level = "processed"
"#,
    );

    let config = SolSenderConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(
        config.rpc_url_for(SolanaNetwork::MainnetBeta),
        "http://localhost:8899"
    );
    // switching away must reach the cluster the explorer link names
    assert_eq!(
        config.rpc_url_for(SolanaNetwork::Devnet),
        "https://api.devnet.solana.com"
    );
}

#[test]
fn test_rpc_url_override_follows_configured_network() {
    let config = SolSenderConfig {
        network: SolanaNetwork::Devnet,
        rpc_url: Some("https://devnet.example.com".to_string()),
        ..SolSenderConfig::default()
    };

    assert_eq!(
        config.rpc_url_for(SolanaNetwork::Devnet),
        "https://devnet.example.com"
    );
    assert_eq!(
        config.rpc_url_for(config.network.other()),
        "https://api.mainnet-beta.solana.com"
    );
}

#[test]
fn test_load_config_with_different_commitment_levels() {
    let test_cases = [
        ("processed", CommitmentLevel::Processed),
        ("confirmed", CommitmentLevel::Confirmed),
        ("finalized", CommitmentLevel::Finalized),
    ];

    for (level_str, expected_level) in test_cases {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = write_config(
            &temp_dir,
            &format!(
                r#"
keypair-path = "/tmp/test.json"
commitment-level = "{level_str}"
"#
            ),
        );

        let config = SolSenderConfig::load_from_path(&config_path)
            .unwrap_or_else(|_| panic!("Failed to load config with level {level_str}"));

        assert_eq!(config.commitment_level, expected_level);
    }
}

#[test]
fn test_load_config_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = SolSenderConfig::load_from_path(&temp_dir.path().join("nonexistent.toml"));

    assert!(matches!(result, Err(SolSenderError::ConfigPathDoesNotExist)));
}

#[test]
fn test_load_config_malformed_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
keypair-path = "~/.config/solana/id.json
commitment-level = "confirmed"
"#,
    );

    let result = SolSenderConfig::load_from_path(&config_path);

    assert!(matches!(result, Err(SolSenderError::TomlParseError(_))));
}

#[test]
fn test_load_config_rejects_bad_values() {
    let contents = [
        // missing commitment-level
        "keypair-path = \"/tmp/test.json\"\n",
        "keypair-path = \"/tmp/test.json\"\ncommitment-level = \"invalid_level\"\n",
        "network = \"testnet\"\nkeypair-path = \"/tmp/test.json\"\ncommitment-level = \"confirmed\"\n",
    ];

    for content in contents {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = write_config(&temp_dir, content);
        assert!(
            SolSenderConfig::load_from_path(&config_path).is_err(),
            "should reject:\n{content}"
        );
    }
}

#[test]
fn test_config_keypair_path_tilde_expansion() {
    let Some(home_dir) = dirs::home_dir() else {
        eprintln!("Skipping test: HOME not set");
        return;
    };
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
keypair-path = "~/my/custom/keypair.json"
commitment-level = "finalized"
"#,
    );

    let config = SolSenderConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.keypair_path, home_dir.join("my/custom/keypair.json"));
}

#[test]
fn test_default_config_points_at_solana_cli_keypair() {
    let config = SolSenderConfig::default();

    assert_eq!(config.network, SolanaNetwork::MainnetBeta);
    assert_eq!(config.commitment_level, CommitmentLevel::Confirmed);
    assert!(config.keypair_path.ends_with(".config/solana/id.json"));
}
