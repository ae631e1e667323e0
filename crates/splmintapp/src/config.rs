//! # Configuration
//!
//! Splmint configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `SPLMINT_SOLANA_BIN`, `SPLMINT_MIN_BALANCE`, etc.
//! 2. **Project Config**: `splmint.toml` in the working directory.
//! 3. **Global Config**: `splmint.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped silently.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `solana_bin` | `solana` | Balance-query tool |
//! | `keygen_bin` | `solana-keygen` | Key generation and pubkey lookup tool |
//! | `spl_token_bin` | `spl-token` | Token CLI used for the creation sequence |
//! | `output_dir` | `.` | Where `<symbol>-token.json` files are written |
//! | `wallet_dir` | `.` | Where generated `wallet_*.json` key files are written |
//! | `min_balance` | `0.01` | Minimum SOL the wallet must hold before creating a token |
//! | `chain_id` | `101` | `chainId` recorded in metadata (101 = mainnet-beta) |
//! | `placeholder_logo_uri` | `https://yourdomain.com/logo.png` | `logoURI` when none is given |
//! | `setup_script` | `setup-install.sh` | Script run by `splmint setup` |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "splmint.toml";

pub const DEFAULT_MIN_BALANCE: f64 = 0.01;
pub const DEFAULT_CHAIN_ID: i64 = 101;
pub const DEFAULT_PLACEHOLDER_LOGO_URI: &str = "https://yourdomain.com/logo.png";

/// Configuration for splmint, stored in `splmint.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MintConfig {
    /// Program used for balance queries.
    #[config(env = "SPLMINT_SOLANA_BIN", default = "solana")]
    pub solana_bin: String,

    /// Program used for key generation and public key lookup.
    #[config(env = "SPLMINT_KEYGEN_BIN", default = "solana-keygen")]
    pub keygen_bin: String,

    /// Program used for the token creation sequence.
    #[config(env = "SPLMINT_SPL_TOKEN_BIN", default = "spl-token")]
    pub spl_token_bin: String,

    /// Directory that receives `<symbol>-token.json` metadata files.
    #[config(env = "SPLMINT_OUTPUT_DIR", default = ".")]
    pub output_dir: PathBuf,

    /// Directory that receives generated wallet key files.
    #[config(env = "SPLMINT_WALLET_DIR", default = ".")]
    pub wallet_dir: PathBuf,

    /// Minimum wallet balance, in SOL, required before creating a token.
    #[config(env = "SPLMINT_MIN_BALANCE", default = 0.01)]
    pub min_balance: f64,

    /// Chain id written into token metadata.
    #[config(env = "SPLMINT_CHAIN_ID", default = 101)]
    pub chain_id: i64,

    /// Logo URI used when neither the request nor a previewed URL provides one.
    #[config(
        env = "SPLMINT_PLACEHOLDER_LOGO_URI",
        default = "https://yourdomain.com/logo.png"
    )]
    pub placeholder_logo_uri: String,

    /// Setup script run by `splmint setup`.
    #[config(env = "SPLMINT_SETUP_SCRIPT", default = "setup-install.sh")]
    pub setup_script: PathBuf,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            solana_bin: "solana".to_string(),
            keygen_bin: "solana-keygen".to_string(),
            spl_token_bin: "spl-token".to_string(),
            output_dir: PathBuf::from("."),
            wallet_dir: PathBuf::from("."),
            min_balance: DEFAULT_MIN_BALANCE,
            chain_id: DEFAULT_CHAIN_ID,
            placeholder_logo_uri: DEFAULT_PLACEHOLDER_LOGO_URI.to_string(),
            setup_script: PathBuf::from("setup-install.sh"),
        }
    }
}

impl MintConfig {
    /// Load configuration for a working directory, honoring env and global overrides.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(project_dir.join(CONFIG_FILE_NAME));
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        Ok(builder.load()?)
    }

    /// Resolve relative directories against `base`, leaving absolute ones untouched.
    pub fn resolve_dirs(mut self, base: &Path) -> Self {
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        if self.wallet_dir.is_relative() {
            self.wallet_dir = base.join(&self.wallet_dir);
        }
        self
    }

    /// Key/value pairs for display, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("solana_bin", self.solana_bin.clone()),
            ("keygen_bin", self.keygen_bin.clone()),
            ("spl_token_bin", self.spl_token_bin.clone()),
            ("output_dir", self.output_dir.display().to_string()),
            ("wallet_dir", self.wallet_dir.display().to_string()),
            ("min_balance", self.min_balance.to_string()),
            ("chain_id", self.chain_id.to_string()),
            ("placeholder_logo_uri", self.placeholder_logo_uri.clone()),
            ("setup_script", self.setup_script.display().to_string()),
        ]
    }
}

/// Location of the per-user config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "splmint", "splmint")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
