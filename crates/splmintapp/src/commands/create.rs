//! The token creation workflow.
//!
//! ```text
//! validate ─► balance gate ─► create-token ─► create-account ─► mint
//!          ─► authorize --disable ─► save metadata
//! ```
//!
//! Nothing external runs until validation passes, and no creation step runs
//! unless the balance gate passes. Each step only runs if the previous one
//! succeeded. The metadata record is written only after all four steps; there
//! is no retry and no rollback of steps already committed on-chain.

use crate::commands::balance::{query_balance, BalanceError};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::MintConfig;
use crate::error::{MintError, Result};
use crate::model::{CreationStep, TokenMetadata, TokenRequest, UTILITY_TOKEN_TAG};
use crate::runner::{CommandOutput, CommandRunner, Invocation, RunError};
use crate::store::MetadataStore;
use std::path::PathBuf;

/// A request whose fields have all been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub name: String,
    pub symbol: String,
    pub supply: u64,
    pub decimals: u8,
    pub logo_uri: Option<String>,
    pub wallet_pubkey: String,
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MintError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// The symbol names the metadata file, so it must stay a single path component.
fn check_symbol(symbol: &str) -> Result<()> {
    let forbidden = ["/", "\\", "\0", ".."];
    if let Some(part) = forbidden.iter().find(|part| symbol.contains(**part)) {
        return Err(MintError::InvalidField {
            field: "symbol",
            reason: format!("must not contain {:?}", part),
        });
    }
    Ok(())
}

pub fn validate(request: &TokenRequest) -> Result<ValidRequest> {
    let name = required(&request.name, "name")?;
    let symbol = required(&request.symbol, "symbol")?;
    let supply_raw = required(&request.supply, "supply")?;
    let decimals_raw = required(&request.decimals, "decimals")?;
    let wallet_pubkey = required(&request.wallet_pubkey, "wallet")?;
    check_symbol(&symbol)?;

    let supply: u64 = supply_raw.parse().map_err(|_| MintError::InvalidField {
        field: "supply",
        reason: format!("{:?} is not a whole number", supply_raw),
    })?;
    if supply == 0 {
        return Err(MintError::InvalidField {
            field: "supply",
            reason: "must be greater than zero".to_string(),
        });
    }

    let decimals: u8 = decimals_raw.parse().map_err(|_| MintError::InvalidField {
        field: "decimals",
        reason: format!("{:?} is not an integer between 0 and 255", decimals_raw),
    })?;

    let logo_uri = request
        .logo_uri
        .as_deref()
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(str::to_string);

    Ok(ValidRequest {
        name,
        symbol,
        supply,
        decimals,
        logo_uri,
        wallet_pubkey,
    })
}

fn check_funds<R: CommandRunner>(runner: &R, config: &MintConfig, pubkey: &str) -> Result<()> {
    let balance = query_balance(runner, config, pubkey).map_err(|e: BalanceError| {
        tracing::warn!(error = %e, "balance check failed");
        MintError::BalanceCheckFailed(e.to_string())
    })?;
    if balance.sol < config.min_balance {
        return Err(MintError::InsufficientFunds {
            balance: balance.sol,
            minimum: config.min_balance,
        });
    }
    tracing::debug!(balance = balance.sol, "balance check passed");
    Ok(())
}

fn step_args(step: CreationStep, mint: &str, supply: u64) -> Vec<String> {
    match step {
        CreationStep::CreateToken => vec!["create-token".to_string()],
        CreationStep::CreateAccount => vec!["create-account".to_string(), mint.to_string()],
        CreationStep::Mint => vec!["mint".to_string(), mint.to_string(), supply.to_string()],
        CreationStep::DisableMintAuthority => vec![
            "authorize".to_string(),
            mint.to_string(),
            "mint".to_string(),
            "--disable".to_string(),
        ],
    }
}

fn run_step<R: CommandRunner>(
    runner: &R,
    config: &MintConfig,
    step: CreationStep,
    args: Vec<String>,
) -> Result<CommandOutput> {
    let invocation = Invocation::new(&config.spl_token_bin).args(args);
    tracing::info!(step = %step, command = %invocation, "running creation step");

    match runner.run(&invocation) {
        Ok(output) if output.success() => Ok(output),
        Ok(output) => Err(MintError::TokenCreationFailed {
            step,
            output: output.error_text(),
        }),
        Err(RunError::NotFound { program }) => Err(MintError::CliMissing { program }),
        Err(RunError::Io { source, .. }) => Err(MintError::TokenCreationFailed {
            step,
            output: source.to_string(),
        }),
    }
}

/// The mint address printed by `create-token`: its last non-empty output line.
pub fn parse_mint(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Run the full workflow and persist the resulting metadata.
///
/// `fallback_logo_uri` is used when the request carries no logo URI, before the
/// configured placeholder.
pub fn create_token<R: CommandRunner, S: MetadataStore>(
    runner: &R,
    store: &S,
    config: &MintConfig,
    request: &TokenRequest,
    fallback_logo_uri: Option<&str>,
) -> Result<(TokenMetadata, PathBuf)> {
    let request = validate(request)?;
    check_funds(runner, config, &request.wallet_pubkey)?;

    let output = run_step(
        runner,
        config,
        CreationStep::CreateToken,
        step_args(CreationStep::CreateToken, "", request.supply),
    )?;
    let mint = parse_mint(&output.stdout).ok_or_else(|| MintError::TokenCreationFailed {
        step: CreationStep::CreateToken,
        output: "no mint address in create-token output".to_string(),
    })?;

    for step in &CreationStep::SEQUENCE[1..] {
        run_step(runner, config, *step, step_args(*step, &mint, request.supply))?;
    }

    let metadata = TokenMetadata {
        chain_id: config.chain_id,
        address: mint,
        symbol: request.symbol,
        name: request.name,
        decimals: request.decimals,
        logo_uri: request
            .logo_uri
            .or_else(|| fallback_logo_uri.map(str::to_string))
            .unwrap_or_else(|| config.placeholder_logo_uri.clone()),
        tags: vec![UTILITY_TOKEN_TAG.to_string()],
    };
    let path = store.save(&metadata)?;
    Ok((metadata, path))
}

pub fn run<R: CommandRunner, S: MetadataStore>(
    runner: &R,
    store: &S,
    config: &MintConfig,
    request: &TokenRequest,
    fallback_logo_uri: Option<&str>,
) -> Result<CmdResult> {
    let (metadata, path) = create_token(runner, store, config, request, fallback_logo_uri)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Token Created"));
    result.add_message(CmdMessage::info(format!("Mint: {}", metadata.address)));
    result.add_message(CmdMessage::info(format!(
        "Metadata saved as {}",
        path.display()
    )));
    Ok(result.with_metadata(metadata, path))
}
