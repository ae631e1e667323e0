use crate::commands::CmdMessage;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const UTILITY_TOKEN_TAG: &str = "utility-token";

/// Token parameters as entered by the user. Built fresh for every submission.
///
/// Numeric fields stay strings here: they are validated by the create command,
/// which is what reports `MissingField` / `InvalidField`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub name: String,
    pub symbol: String,
    pub supply: String,
    pub decimals: String,
    pub logo_uri: Option<String>,
    pub wallet_pubkey: String,
}

impl TokenRequest {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        supply: impl Into<String>,
        decimals: impl Into<String>,
        wallet_pubkey: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            supply: supply.into(),
            decimals: decimals.into(),
            logo_uri: None,
            wallet_pubkey: wallet_pubkey.into(),
        }
    }

    pub fn with_logo_uri(mut self, uri: impl Into<String>) -> Self {
        self.logo_uri = Some(uri.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletInfo {
    pub public_key: String,
    pub key_file: PathBuf,
}

/// Token-list entry written to `<symbol>-token.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub chain_id: i64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub tags: Vec<String>,
}

/// The four external calls of the creation sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    CreateToken,
    CreateAccount,
    Mint,
    DisableMintAuthority,
}

impl CreationStep {
    pub const SEQUENCE: [CreationStep; 4] = [
        CreationStep::CreateToken,
        CreationStep::CreateAccount,
        CreationStep::Mint,
        CreationStep::DisableMintAuthority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreationStep::CreateToken => "create-token",
            CreationStep::CreateAccount => "create-account",
            CreationStep::Mint => "mint",
            CreationStep::DisableMintAuthority => "disable-mint-authority",
        }
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    File(PathBuf),
    Url(String),
}

impl LogoSource {
    /// Treats `http://` and `https://` inputs as URLs and anything else as a path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            LogoSource::Url(trimmed.to_string())
        } else {
            LogoSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for LogoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoSource::File(path) => write!(f, "{}", path.display()),
            LogoSource::Url(url) => f.write_str(url),
        }
    }
}

/// A decoded logo, already resized for display.
#[derive(Debug, Clone)]
pub struct LogoPreview {
    pub source: LogoSource,
    pub image: RgbaImage,
}

impl LogoPreview {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Session state a UI client would otherwise keep in globals.
#[derive(Debug, Default)]
pub struct AppState {
    pub wallet: Option<WalletInfo>,
    pub logo: Option<LogoPreview>,
    /// Running output panel. Lives only as long as the session.
    pub transcript: Vec<CmdMessage>,
}

impl AppState {
    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet.as_ref().map(|w| w.public_key.as_str())
    }

    /// URL of the current logo preview, if it was fetched from the network.
    pub fn logo_url(&self) -> Option<&str> {
        match self.logo.as_ref().map(|l| &l.source) {
            Some(LogoSource::Url(url)) => Some(url.as_str()),
            _ => None,
        }
    }
}
