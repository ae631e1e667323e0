use super::{CommandOutput, CommandRunner, Invocation, RunError};
use std::cell::RefCell;

/// What a scripted rule answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Output(CommandOutput),
    NotFound,
}

impl Reply {
    pub fn success(stdout: impl Into<String>) -> Self {
        Reply::Output(CommandOutput {
            code: Some(0),
            stdout: stdout.into(),
            ..Default::default()
        })
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Reply::Output(CommandOutput {
            code: Some(code),
            stderr: stderr.into(),
            ..Default::default()
        })
    }

    pub fn not_found() -> Self {
        Reply::NotFound
    }
}

#[derive(Debug)]
struct Rule {
    program: String,
    args_prefix: Vec<String>,
    reply: Reply,
}

impl Rule {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.program == invocation.program
            && invocation.args.len() >= self.args_prefix.len()
            && self
                .args_prefix
                .iter()
                .zip(&invocation.args)
                .all(|(want, got)| want == got)
    }
}

/// In-memory runner for testing.
///
/// Rules match on program name plus a prefix of the arguments; the first
/// matching rule in registration order answers. Invocations that match no rule
/// behave like a program missing from PATH. Every invocation is recorded,
/// matched or not.
///
/// Uses `RefCell` since splmint is single-threaded and `CommandRunner::run`
/// takes `&self`.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    rules: Vec<Rule>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<I, A>(mut self, program: &str, args_prefix: I, reply: Reply) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.rules.push(Rule {
            program: program.to_string(),
            args_prefix: args_prefix.into_iter().map(Into::into).collect(),
            reply,
        });
        self
    }

    /// All invocations seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations of a given program, in order.
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| inv.program == program)
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        self.calls.borrow_mut().push(invocation.clone());

        match self.rules.iter().find(|rule| rule.matches(invocation)) {
            Some(Rule {
                reply: Reply::Output(output),
                ..
            }) => Ok(output.clone()),
            Some(Rule {
                reply: Reply::NotFound,
                ..
            })
            | None => Err(RunError::NotFound {
                program: invocation.program.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let runner = ScriptedRunner::new()
            .on("spl-token", ["create-token"], Reply::success("Mint1\n"))
            .on("spl-token", Vec::<String>::new(), Reply::failure(1, "generic"));

        let out = runner
            .run(&Invocation::new("spl-token").arg("create-token"))
            .unwrap();
        assert_eq!(out.stdout, "Mint1\n");

        let out = runner
            .run(&Invocation::new("spl-token").args(["mint", "Mint1", "10"]))
            .unwrap();
        assert_eq!(out.code, Some(1));
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn unmatched_invocation_is_not_found_and_recorded() {
        let runner = ScriptedRunner::new();
        let err = runner.run(&Invocation::new("solana").arg("balance")).unwrap_err();
        assert!(matches!(err, RunError::NotFound { program } if program == "solana"));
        assert_eq!(runner.calls_to("solana").len(), 1);
    }

    #[test]
    fn prefix_longer_than_args_does_not_match() {
        let runner = ScriptedRunner::new().on(
            "spl-token",
            ["authorize", "Mint1", "mint", "--disable"],
            Reply::success(""),
        );
        assert!(runner
            .run(&Invocation::new("spl-token").arg("authorize"))
            .is_err());
    }
}
