use crate::cli::commands::CliArgs;
use crate::cli::output::{OutputFormat, OutputFormatter};
use crate::cli::progress::ConsoleProgress;
use crate::config::GuardConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::pipeline::{HookContext, HookOrchestrator, HookReport};
use crate::process::{CommandRunner, SystemCommandRunner};
use crate::progress::{LoggingHandler, ProgressHandler};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Environment config with command-line overrides applied
pub fn build_config(args: &CliArgs) -> GuardConfig {
    let mut config = GuardConfig::default();

    if let Some(dotnet) = &args.dotnet {
        config.dotnet_bin = dotnet.clone();
    }
    if let Some(git) = &args.git {
        config.git_bin = git.clone();
    }
    if let Some(glob) = &args.solution_glob {
        config.solution_glob = glob.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }
    if args.skip_build {
        config.skip_build = true;
    }

    config
}

fn resolve_repo_root(repo: Option<&Path>) -> Result<PathBuf> {
    match repo {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Repository path not found: {}", path.display())),
        None => env::current_dir().context("Failed to determine current directory"),
    }
}

/// Runs the hook phases against `repo_root` with the given collaborators
pub async fn run_hook(
    repo_root: PathBuf,
    config: GuardConfig,
    runner: Arc<dyn CommandRunner>,
    file_system: Arc<dyn FileSystem>,
    progress: Arc<dyn ProgressHandler>,
) -> HookReport {
    let context =
        HookContext::new(repo_root, config, runner, file_system).with_progress(progress);
    HookOrchestrator::new().execute(context).await
}

pub async fn handle_run(args: &CliArgs) -> i32 {
    let config = build_config(args);
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        eprintln!("Error: {}", e);
        return 1;
    }
    debug!("{}", config);

    let repo_root = match resolve_repo_root(args.repo.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            return 1;
        }
    };
    info!(repo = %repo_root.display(), "Running pre-commit validation");

    let format: OutputFormat = args.format.into();
    let (progress, formatter) = match format {
        OutputFormat::Human => (
            Arc::new(ConsoleProgress::stdout()) as Arc<dyn ProgressHandler>,
            OutputFormatter::new(format).after_live_progress(),
        ),
        OutputFormat::Json | OutputFormat::Yaml => (
            Arc::new(LoggingHandler) as Arc<dyn ProgressHandler>,
            OutputFormatter::new(format),
        ),
    };

    let report = run_hook(
        repo_root,
        config,
        Arc::new(SystemCommandRunner),
        Arc::new(RealFileSystem),
        progress,
    )
    .await;

    match formatter.format(&report) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            error!("Failed to format report: {:#}", e);
            eprintln!("Error: {:#}", e);
            return 1;
        }
    }

    report.exit_code
}
