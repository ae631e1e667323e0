use crate::commands::{CmdMessage, CmdResult};
use crate::config::MintConfig;
use crate::runner::{CommandRunner, Invocation, RunError};
use thiserror::Error;

/// Literal returned by [`get_balance`] when the lookup fails for any reason.
pub const BALANCE_ERROR: &str = "Error";

#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub sol: f64,
    /// Trimmed output of the balance tool, e.g. `1.5 SOL`.
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("{program} not found")]
    CliMissing { program: String },

    #[error("balance query exited with {}: {stderr}", exit_label(.code))]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("balance query failed: {0}")]
    Io(String),

    #[error("unparseable balance output: {0:?}")]
    Unparseable(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Parse the leading amount of balance output such as `"1.5 SOL"`.
pub fn parse_balance(text: &str) -> Result<f64, BalanceError> {
    let unparseable = || BalanceError::Unparseable(text.to_string());
    let amount: f64 = text
        .split_whitespace()
        .next()
        .ok_or_else(unparseable)?
        .parse()
        .map_err(|_| unparseable())?;
    if !amount.is_finite() {
        return Err(unparseable());
    }
    Ok(amount)
}

/// Query the native balance of `pubkey`, keeping every failure mode distinct.
pub fn query_balance<R: CommandRunner>(
    runner: &R,
    config: &MintConfig,
    pubkey: &str,
) -> Result<Balance, BalanceError> {
    let invocation = Invocation::new(&config.solana_bin).args(["balance", pubkey]);
    let output = runner.run(&invocation).map_err(|e| match e {
        RunError::NotFound { program } => BalanceError::CliMissing { program },
        RunError::Io { source, .. } => BalanceError::Io(source.to_string()),
    })?;

    if !output.success() {
        return Err(BalanceError::NonZeroExit {
            code: output.code,
            stderr: output.error_text(),
        });
    }

    if output.stdout_lossy {
        return Err(BalanceError::Unparseable(output.stdout));
    }
    let raw = output.stdout.trim().to_string();
    let sol = parse_balance(&raw)?;
    Ok(Balance { sol, raw })
}

/// Balance text for display: the tool's trimmed output, or `"Error"`.
///
/// Never fails: every [`BalanceError`] collapses into the sentinel.
pub fn get_balance<R: CommandRunner>(runner: &R, config: &MintConfig, pubkey: &str) -> String {
    match query_balance(runner, config, pubkey) {
        Ok(balance) => balance.raw,
        Err(e) => {
            tracing::debug!(error = %e, "balance lookup failed");
            BALANCE_ERROR.to_string()
        }
    }
}

pub fn run<R: CommandRunner>(runner: &R, config: &MintConfig, pubkey: &str) -> CmdResult {
    let balance = get_balance(runner, config, pubkey);
    let mut result = CmdResult::default();
    if balance == BALANCE_ERROR {
        result.add_message(CmdMessage::warning(format!("Balance: {}", balance)));
    } else {
        result.add_message(CmdMessage::info(format!("Balance: {}", balance)));
    }
    result.with_balance(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::scripted::{Reply, ScriptedRunner};
    use crate::runner::CommandOutput;

    const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    #[test]
    fn parse_balance_reads_leading_amount() {
        assert_eq!(parse_balance("1.5 SOL").unwrap(), 1.5);
        assert_eq!(parse_balance("0 SOL").unwrap(), 0.0);
        assert_eq!(parse_balance("  2  ").unwrap(), 2.0);
    }

    #[test]
    fn parse_balance_rejects_garbage() {
        assert!(matches!(parse_balance(""), Err(BalanceError::Unparseable(_))));
        assert!(matches!(parse_balance("Error"), Err(BalanceError::Unparseable(_))));
        assert!(matches!(parse_balance("NaN SOL"), Err(BalanceError::Unparseable(_))));
        assert!(matches!(parse_balance("inf SOL"), Err(BalanceError::Unparseable(_))));
    }

    #[test]
    fn get_balance_returns_trimmed_output() {
        let runner = ScriptedRunner::new().on("solana", ["balance"], Reply::success("1.5 SOL\n"));
        let config = MintConfig::default();
        assert_eq!(get_balance(&runner, &config, WALLET), "1.5 SOL");

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, vec!["balance".to_string(), WALLET.to_string()]);
    }

    #[test]
    fn get_balance_returns_error_literal_on_nonzero_exit() {
        let runner =
            ScriptedRunner::new().on("solana", ["balance"], Reply::failure(1, "Invalid pubkey"));
        assert_eq!(get_balance(&runner, &MintConfig::default(), WALLET), "Error");
    }

    #[test]
    fn get_balance_returns_error_literal_when_tool_missing() {
        let runner = ScriptedRunner::new();
        assert_eq!(get_balance(&runner, &MintConfig::default(), WALLET), "Error");
    }

    #[test]
    fn query_balance_distinguishes_failures() {
        let config = MintConfig::default();

        let missing = ScriptedRunner::new();
        assert!(matches!(
            query_balance(&missing, &config, WALLET),
            Err(BalanceError::CliMissing { .. })
        ));

        let failing =
            ScriptedRunner::new().on("solana", ["balance"], Reply::failure(2, "rpc down"));
        match query_balance(&failing, &config, WALLET) {
            Err(BalanceError::NonZeroExit { code, stderr }) => {
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "rpc down");
            }
            other => panic!("unexpected: {:?}", other),
        }

        let garbled = ScriptedRunner::new().on("solana", ["balance"], Reply::success("lots\n"));
        assert!(matches!(
            query_balance(&garbled, &config, WALLET),
            Err(BalanceError::Unparseable(_))
        ));
    }

    #[test]
    fn undecodable_output_is_an_error() {
        let runner = ScriptedRunner::new().on(
            "solana",
            ["balance"],
            Reply::Output(CommandOutput::from_bytes(Some(0), b"1.5 SOL\xff\n", b"")),
        );
        let config = MintConfig::default();

        assert_eq!(get_balance(&runner, &config, WALLET), BALANCE_ERROR);
        assert!(matches!(
            query_balance(&runner, &config, WALLET),
            Err(BalanceError::Unparseable(_))
        ));
    }

    #[test]
    fn get_balance_returns_error_literal_on_unparseable_output() {
        let runner = ScriptedRunner::new().on("solana", ["balance"], Reply::success("lots\n"));
        assert_eq!(get_balance(&runner, &MintConfig::default(), WALLET), "Error");
    }

    #[test]
    fn query_balance_parses_amount() {
        let runner = ScriptedRunner::new().on("solana", ["balance"], Reply::success("0.25 SOL\n"));
        let balance = query_balance(&runner, &MintConfig::default(), WALLET).unwrap();
        assert_eq!(balance.sol, 0.25);
        assert_eq!(balance.raw, "0.25 SOL");
    }

    #[test]
    fn run_uses_configured_program() {
        let config = MintConfig {
            solana_bin: "/opt/solana/bin/solana".to_string(),
            ..Default::default()
        };
        let runner = ScriptedRunner::new().on(
            "/opt/solana/bin/solana",
            ["balance"],
            Reply::success("3 SOL"),
        );
        let result = run(&runner, &config, WALLET);
        assert_eq!(result.balance.as_deref(), Some("3 SOL"));
        assert_eq!(result.messages[0].content, "Balance: 3 SOL");
    }
}
