use std::path::{Path, PathBuf};
use std::str::FromStr;

use escrow_client_core::{EscrowError, Result};
use serde::Deserialize;
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};

/// Local validator default.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

/// Connection settings, passed explicitly to [`RpcLedger::new`](crate::RpcLedger::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub json_rpc_url: String,
    pub commitment: CommitmentConfig,
    /// Default signer keypair file, if the CLI config names one.
    pub keypair_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            json_rpc_url: DEFAULT_RPC_URL.to_owned(),
            commitment: CommitmentConfig::confirmed(),
            keypair_path: None,
        }
    }
}

/// The subset of the Solana CLI `config.yml` the client reads.
#[derive(Debug, Default, Deserialize)]
struct CliConfigFile {
    json_rpc_url: Option<String>,
    keypair_path: Option<String>,
    commitment: Option<String>,
}

impl ClientConfig {
    /// Load `json_rpc_url`, `keypair_path` and `commitment` from a Solana
    /// CLI config file. Missing keys keep their defaults.
    pub fn from_cli_config(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| EscrowError::Config(format!("{}: {err}", path.display())))?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let file: CliConfigFile =
            serde_yaml::from_str(raw).map_err(|err| EscrowError::Config(err.to_string()))?;

        let mut config = Self::default();
        if let Some(url) = file.json_rpc_url.filter(|url| !url.is_empty()) {
            config.json_rpc_url = url;
        }
        if let Some(level) = file.commitment {
            let commitment = CommitmentLevel::from_str(&level)
                .map_err(|_| EscrowError::Config(format!("unknown commitment level `{level}`")))?;
            config.commitment = CommitmentConfig { commitment };
        }
        config.keypair_path = file.keypair_path.filter(|p| !p.is_empty()).map(PathBuf::from);
        Ok(config)
    }

    /// `~/.config/solana/cli/config.yml`, or `None` without a home directory.
    pub fn cli_config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("solana")
                .join("cli")
                .join("config.yml"),
        )
    }
}
