use dotnet_guard::{
    CommandOutput, GuardConfig, HookContext, HookOrchestrator, HookReport, MockFileSystem,
    ScriptedCommandRunner,
};
use std::path::PathBuf;
use std::sync::Arc;

pub const REPO_ROOT: &str = "/repo";

#[allow(dead_code)]
pub fn dotnet_guard_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("dotnet-guard")
}

#[allow(dead_code)]
pub fn mock_repo() -> MockFileSystem {
    MockFileSystem::with_root(PathBuf::from(REPO_ROOT))
}

/// `git diff --name-status -z` output with every path marked modified
#[allow(dead_code)]
pub fn name_status(paths: &[&str]) -> String {
    paths.iter().map(|p| format!("M\0{}\0", p)).collect()
}

/// Runner with a working `dotnet` and the given staged paths
///
/// Builds are unscripted; add `dotnet build` rules before these with
/// [`ScriptedCommandRunner::on_output`] as needed.
#[allow(dead_code)]
pub fn healthy_runner(builds: ScriptedCommandRunner, staged: &[&str]) -> ScriptedCommandRunner {
    builds
        .on_output("dotnet", &["--version"], CommandOutput::ok("8.0.100\n"))
        .on_output("git", &["diff"], CommandOutput::ok(name_status(staged)))
}

#[allow(dead_code)]
pub async fn run_hook(
    fs: MockFileSystem,
    runner: Arc<ScriptedCommandRunner>,
    config: GuardConfig,
) -> HookReport {
    let context = HookContext::new(PathBuf::from(REPO_ROOT), config, runner, Arc::new(fs));
    HookOrchestrator::new().execute(context).await
}
