//! Child process execution behind a trait, so the pipeline can run without
//! `git` or `dotnet` installed

mod runner;
mod scripted;

pub use runner::{CommandOutput, CommandRunner, Invocation, ProcessError, SystemCommandRunner};
pub use scripted::{ScriptedCommandRunner, ScriptedResponse};
