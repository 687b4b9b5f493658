use super::{CommandOutput, CommandRunner, Invocation, ProcessError};
use async_trait::async_trait;
use std::io;
use std::sync::Mutex;

/// Canned result for a scripted command
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Output(CommandOutput),
    /// The process cannot be started at all
    SpawnFailure(String),
}

#[derive(Debug, Clone)]
struct ScriptedRule {
    program: String,
    args_prefix: Vec<String>,
    response: ScriptedResponse,
}

impl ScriptedRule {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.program == self.program && invocation.args.starts_with(&self.args_prefix)
    }
}

/// Test double that answers invocations from a script and records every call
///
/// Rules are checked in the order they were added; the first rule whose
/// program matches and whose argument prefix matches wins. Unscripted calls
/// fail as if the program were not installed.
#[derive(Debug, Default)]
pub struct ScriptedCommandRunner {
    rules: Vec<ScriptedRule>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, program: &str, args_prefix: &[&str], response: ScriptedResponse) -> Self {
        self.rules.push(ScriptedRule {
            program: program.to_string(),
            args_prefix: args_prefix.iter().map(|a| a.to_string()).collect(),
            response,
        });
        self
    }

    pub fn on_output(self, program: &str, args_prefix: &[&str], output: CommandOutput) -> Self {
        self.on(program, args_prefix, ScriptedResponse::Output(output))
    }

    /// Every invocation seen so far, in call order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Number of calls to `program` whose first argument is `subcommand`
    pub fn count(&self, program: &str, subcommand: &str) -> usize {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                i.program == program && i.args.first().map(String::as_str) == Some(subcommand)
            })
            .count()
    }
}

#[async_trait]
impl CommandRunner for ScriptedCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ProcessError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let response = self
            .rules
            .iter()
            .find(|rule| rule.matches(invocation))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| {
                ScriptedResponse::SpawnFailure(format!("no script for `{}`", invocation))
            });

        match response {
            ScriptedResponse::Output(output) => Ok(output),
            ScriptedResponse::SpawnFailure(message) => Err(ProcessError::Spawn {
                program: invocation.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, message),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_matching_rule_wins() {
        let runner = ScriptedCommandRunner::new()
            .on_output("dotnet", &["build", "/repo/Bad.sln"], CommandOutput::failed(1, "boom"))
            .on_output("dotnet", &["build"], CommandOutput::ok(""));

        let bad = Invocation::new("dotnet", ["build", "/repo/Bad.sln"]);
        let good = Invocation::new("dotnet", ["build", "/repo/Good.sln"]);

        assert!(!runner.run(&bad).await.unwrap().success());
        assert!(runner.run(&good).await.unwrap().success());
        assert_eq!(runner.count("dotnet", "build"), 2);
    }

    #[tokio::test]
    async fn test_unscripted_call_fails_to_spawn() {
        let runner = ScriptedCommandRunner::new();
        let result = runner.run(&Invocation::new("git", ["diff"])).await;

        assert!(matches!(result, Err(ProcessError::Spawn { .. })));
        assert_eq!(runner.invocations().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_spawn_failure() {
        let runner = ScriptedCommandRunner::new().on(
            "dotnet",
            &["--version"],
            ScriptedResponse::SpawnFailure("No such file or directory".to_string()),
        );

        let err = runner
            .run(&Invocation::new("dotnet", ["--version"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No such file or directory"));
    }
}
