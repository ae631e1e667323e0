use super::{CommandOutput, CommandRunner, Invocation, RunError};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        tracing::debug!(command = %invocation, "spawning");

        let io_err = |source: std::io::Error| RunError::Io {
            program: invocation.program.clone(),
            source,
        };

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    RunError::NotFound {
                        program: invocation.program.clone(),
                    }
                } else {
                    io_err(e)
                }
            })?;

        if let Some(input) = &invocation.stdin {
            if let Some(mut stdin) = child.stdin.take() {
                // The tool may exit before reading its prompt answer.
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    if e.kind() != ErrorKind::BrokenPipe {
                        return Err(io_err(e));
                    }
                }
            }
        }

        let output = child.wait_with_output().map_err(io_err)?;
        let result =
            CommandOutput::from_bytes(output.status.code(), &output.stdout, &output.stderr);

        if !result.success() {
            tracing::warn!(
                command = %invocation,
                code = ?result.code,
                "command exited with failure"
            );
        }
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let runner = ProcessRunner::new();
        let err = runner
            .run(&Invocation::new("splmint-definitely-not-installed"))
            .unwrap_err();
        assert!(matches!(err, RunError::NotFound { .. }));
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let runner = ProcessRunner::new();
        let output = runner
            .run(&Invocation::new("sh").args(["-c", "echo hello; echo oops >&2; exit 3"]))
            .unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "hello\n");
        assert_eq!(output.stderr, "oops\n");
        assert!(!output.success());
    }

    #[test]
    fn feeds_stdin() {
        let runner = ProcessRunner::new();
        let output = runner
            .run(&Invocation::new("cat").with_stdin("y\n"))
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "y\n");
    }

    #[test]
    fn marks_undecodable_stdout() {
        let runner = ProcessRunner::new();
        let output = runner
            .run(&Invocation::new("sh").args(["-c", "printf '1.5 SOL\\377\\n'"]))
            .unwrap();
        assert!(output.success());
        assert!(output.stdout_lossy);
    }
}
