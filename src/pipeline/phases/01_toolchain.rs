use crate::build_systems::dotnet::parse_version;
use crate::pipeline::context::HookContext;
use crate::pipeline::phase_trait::{HookPhase, PhaseFlow};
use crate::pipeline::report::HookOutcome;
use async_trait::async_trait;
use tracing::{info, warn};

/// Requires a working `dotnet` before any file is looked at
pub struct ToolchainPhase;

#[async_trait]
impl HookPhase for ToolchainPhase {
    fn name(&self) -> &'static str {
        "Toolchain"
    }

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow {
        let toolchain = context.toolchain();
        let invocation = toolchain.version_invocation(&context.repo_root);
        let run = context.runner.run(&invocation).await;

        let failure = match run {
            Ok(output) if output.success() => {
                let version = parse_version(&output.stdout);
                info!(version = ?version, "dotnet CLI available");
                context.toolchain_version = version;
                return PhaseFlow::Continue;
            }
            Ok(output) => {
                let stderr = output.stderr.trim();
                if stderr.is_empty() {
                    format!("`{}` exited with {:?}", invocation, output.exit_code)
                } else {
                    format!("`{}` exited with {:?}: {}", invocation, output.exit_code, stderr)
                }
            }
            Err(e) => e.to_string(),
        };

        warn!(binary = toolchain.binary(), reason = %failure, "dotnet CLI unavailable");
        context.result.add_error(format!(
            "dotnet CLI not found. Please install .NET SDK. ({})",
            failure
        ));
        PhaseFlow::Halt(HookOutcome::ToolchainUnavailable)
    }
}
