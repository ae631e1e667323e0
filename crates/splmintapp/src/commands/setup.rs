use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MintError, Result};
use crate::runner::{CommandRunner, Invocation, RunError};
use std::path::Path;

pub const SHELL: &str = "bash";

/// Run the tooling install script and relay what it printed.
///
/// The script's exit status is reported as a warning, never as a failure.
pub fn run<R: CommandRunner>(runner: &R, script: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Running setup script {}...",
        script.display()
    )));

    let invocation = Invocation::new(SHELL).arg(script.to_string_lossy());
    let output = runner.run(&invocation).map_err(|e| match e {
        RunError::NotFound { program } => MintError::CliMissing { program },
        RunError::Io { source, .. } => MintError::Io(source),
    })?;

    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        result.add_message(CmdMessage::info(line));
    }

    let stderr: Vec<&str> = output
        .stderr
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    if !stderr.is_empty() {
        result.add_message(CmdMessage::warning("Warnings/Errors:"));
        for line in stderr {
            result.add_message(CmdMessage::warning(line));
        }
    }

    if !output.success() {
        tracing::warn!(
            code = ?output.code,
            script = %script.display(),
            "setup script exited non-zero"
        );
        result.add_message(CmdMessage::warning(match output.code {
            Some(code) => format!("Setup script exited with status {}", code),
            None => "Setup script was terminated by a signal".to_string(),
        }));
    }

    Ok(result)
}
