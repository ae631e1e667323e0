//! # Command Layer
//!
//! The business logic of splmint. Each operation lives in its own submodule as
//! plain functions generic over the [`CommandRunner`](crate::runner::CommandRunner)
//! and, where persistence is involved, the [`MetadataStore`](crate::store::MetadataStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout/stderr; results and messages are returned
//! - **Process control**: no exit codes; errors are returned as [`MintError`](crate::error::MintError)
//! - **Retries or rollback**: every failure is terminal for the current action
//!
//! ## Structured Returns
//!
//! Each module exposes a typed core function (`create::create_token`,
//! `wallet::generate`, `balance::query_balance`, `logo::load`) plus a `run`
//! wrapper returning [`CmdResult`], which carries the typed payload alongside
//! leveled messages for whatever UI renders them.
//!
//! ## Testing Strategy
//!
//! Command tests use `ScriptedRunner` and `MemMetadataStore`, so no Solana
//! tooling or disk access is needed. They assert on both the result and the
//! exact sequence of invocations issued.
//!
//! ## Command Modules
//!
//! - [`balance`]: Wallet balance lookup
//! - [`wallet`]: Key pair generation
//! - [`create`]: The token creation workflow
//! - [`logo`]: Logo loading and preview
//! - [`setup`]: Tooling install script

use crate::model::{LogoPreview, TokenMetadata, WalletInfo};
use serde::Serialize;
use std::path::PathBuf;

pub mod balance;
pub mod create;
pub mod logo;
pub mod setup;
pub mod wallet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub metadata: Option<TokenMetadata>,
    pub metadata_path: Option<PathBuf>,
    pub wallet: Option<WalletInfo>,
    pub balance: Option<String>,
    pub logo: Option<LogoPreview>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_metadata(mut self, metadata: TokenMetadata, path: PathBuf) -> Self {
        self.metadata = Some(metadata);
        self.metadata_path = Some(path);
        self
    }

    pub fn with_wallet(mut self, wallet: WalletInfo) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn with_balance(mut self, balance: String) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_logo(mut self, logo: LogoPreview) -> Self {
        self.logo = Some(logo);
        self
    }
}
