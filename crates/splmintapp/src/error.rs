use crate::model::CreationStep;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MintError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unable to check balance: {0}")]
    BalanceCheckFailed(String),

    #[error("Insufficient SOL: wallet holds {balance} SOL, at least {minimum} SOL is required")]
    InsufficientFunds { balance: f64, minimum: f64 },

    #[error("{program} not found. Run the setup install to fix this.")]
    CliMissing { program: String },

    #[error("Wallet generation failed: {0}")]
    KeygenFailed(String),

    #[error("Token creation failed at {step}: {output}")]
    TokenCreationFailed { step: CreationStep, output: String },

    #[error("Unable to load image: {0}")]
    ImageLoadFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MintError>;
