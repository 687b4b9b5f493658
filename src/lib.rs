//! dotnet-guard - git pre-commit hook for .NET repositories
//!
//! The hook runs a fixed sequence of phases against the staged side of a
//! commit and collects every finding into one [`ValidationResult`]:
//!
//! 1. **Toolchain**: `dotnet --version` must succeed, otherwise the commit is blocked
//! 2. **Staged files**: added, copied and modified paths from the git index
//! 3. **Filter**: only C# sources (`.cs`) are inspected
//! 4. **Inspect**: substring checks for unfinished code and console debug output (advisory)
//! 5. **Build**: every solution under `dotnet/` is built once; failures block the commit
//!
//! Errors block the commit (exit 1); warnings are only reported.
//!
//! # Example Usage
//!
//! ```no_run
//! use dotnet_guard::{
//!     GuardConfig, HookContext, HookOrchestrator, RealFileSystem, SystemCommandRunner,
//! };
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let context = HookContext::new(
//!     std::env::current_dir()?,
//!     GuardConfig::default(),
//!     Arc::new(SystemCommandRunner),
//!     Arc::new(RealFileSystem),
//! );
//! let report = HookOrchestrator::new().execute(context).await;
//! std::process::exit(report.exit_code);
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`pipeline`]: hook phases, their shared context and the orchestrator
//! - [`validation`]: result accumulator, candidate filter and content rules
//! - [`build_systems`]: `dotnet` invocations and solution discovery
//! - [`git`]: staged file listing
//! - [`process`]: child process seam with a scripted test double
//! - [`fs`]: file system seam with an in-memory test double

pub mod build_systems;
pub mod cli;
pub mod config;
pub mod fs;
pub mod git;
pub mod pipeline;
pub mod process;
pub mod progress;
pub mod util;
pub mod validation;

pub use build_systems::{BuildOutcome, BuildStatus, BuildTarget, DotNetToolchain};
pub use config::{ConfigError, GuardConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use git::{ChangeStatus, StagedFile};
pub use pipeline::{HookContext, HookOrchestrator, HookOutcome, HookReport};
pub use process::{
    CommandOutput, CommandRunner, Invocation, ScriptedCommandRunner, SystemCommandRunner,
};
pub use progress::{LoggingHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use validation::ValidationResult;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");
