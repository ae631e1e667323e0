use crate::commands::{CmdMessage, CmdResult};
use crate::config::MintConfig;
use crate::error::{MintError, Result};
use crate::model::WalletInfo;
use crate::runner::{CommandRunner, Invocation, RunError};
use rand::Rng;
use std::path::Path;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 6;

/// Six random lowercase-alphanumeric characters.
pub fn random_suffix<G: Rng>(rng: &mut G) -> String {
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

pub fn key_file_name(suffix: &str) -> String {
    format!("wallet_{}.json", suffix)
}

fn keygen_error(err: RunError) -> MintError {
    match err {
        RunError::NotFound { program } => MintError::CliMissing { program },
        RunError::Io { source, .. } => MintError::KeygenFailed(source.to_string()),
    }
}

/// Generate a new key pair file and read back its public key.
pub fn generate<R: CommandRunner, G: Rng>(
    runner: &R,
    config: &MintConfig,
    rng: &mut G,
) -> Result<WalletInfo> {
    let key_file = config.wallet_dir.join(key_file_name(&random_suffix(rng)));
    let key_path = key_file.to_string_lossy().into_owned();

    let keygen = Invocation::new(&config.keygen_bin)
        .args(["new", "--no-bip39-passphrase", "--outfile", key_path.as_str()])
        .with_stdin("y\n");
    let output = runner.run(&keygen).map_err(keygen_error)?;
    if !output.success() {
        return Err(MintError::KeygenFailed(output.error_text()));
    }

    let public_key = lookup_pubkey(runner, config, &key_file)?;
    tracing::info!(address = %public_key, key_file = %key_file.display(), "wallet generated");

    Ok(WalletInfo {
        public_key,
        key_file,
    })
}

/// Public key of an existing key pair file.
pub fn lookup_pubkey<R: CommandRunner>(
    runner: &R,
    config: &MintConfig,
    key_file: &Path,
) -> Result<String> {
    let lookup = Invocation::new(&config.keygen_bin)
        .arg("pubkey")
        .arg(key_file.to_string_lossy());
    let output = runner.run(&lookup).map_err(keygen_error)?;
    if !output.success() {
        return Err(MintError::KeygenFailed(output.error_text()));
    }
    let public_key = output.stdout.trim().to_string();
    if public_key.is_empty() {
        return Err(MintError::KeygenFailed(
            "pubkey lookup returned no address".to_string(),
        ));
    }
    Ok(public_key)
}

pub fn run<R: CommandRunner, G: Rng>(
    runner: &R,
    config: &MintConfig,
    rng: &mut G,
) -> Result<CmdResult> {
    let wallet = generate(runner, config, rng)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Wallet Generated"));
    result.add_message(CmdMessage::info(format!("Address: {}", wallet.public_key)));
    result.add_message(CmdMessage::info(format!(
        "Saved to: {}",
        wallet.key_file.display()
    )));
    Ok(result.with_wallet(wallet))
}

/// Adopt an existing key pair file.
pub fn open<R: CommandRunner>(
    runner: &R,
    config: &MintConfig,
    key_file: &Path,
) -> Result<CmdResult> {
    let public_key = lookup_pubkey(runner, config, key_file)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Address: {}", public_key)));
    Ok(result.with_wallet(WalletInfo {
        public_key,
        key_file: key_file.to_path_buf(),
    }))
}
