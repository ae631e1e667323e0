//! # External Command Runner
//!
//! Every call into the Solana tooling goes through [`CommandRunner`]. The trait
//! handles the "how" of running a program (a real child process, or a scripted
//! reply), while the command modules decide the "what": which program, which
//! arguments, and what a given exit status means.
//!
//! Calls are synchronous and block for the full duration of the child process.
//! There is no timeout: a hung tool hangs the caller.
//!
//! ## Implementations
//!
//! - [`process::ProcessRunner`]: Production runner backed by `std::process::Command`.
//! - [`scripted::ScriptedRunner`]: Rule-based fake with a call log, for tests.

use std::fmt;
use thiserror::Error;

pub mod process;
pub mod scripted;

/// A program plus arguments, and optional text fed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Stdout was not valid UTF-8; `stdout` then holds a lossy decode.
    pub stdout_lossy: bool,
}

impl CommandOutput {
    /// Decode captured process output.
    pub fn from_bytes(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        let (stdout, stdout_lossy) = match std::str::from_utf8(stdout) {
            Ok(text) => (text.to_string(), false),
            Err(_) => (String::from_utf8_lossy(stdout).into_owned(), true),
        };
        Self {
            code,
            stdout,
            stderr: String::from_utf8_lossy(stderr).into_owned(),
            stdout_lossy,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Text to surface on failure: stderr, or stdout when stderr is empty.
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Failure to run a program at all, as opposed to it exiting non-zero.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract interface for running external programs.
pub trait CommandRunner {
    /// Run the invocation to completion and capture its output.
    ///
    /// A non-zero exit is still `Ok`: callers inspect [`CommandOutput::success`].
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        (**self).run(invocation)
    }
}
