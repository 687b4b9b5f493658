use crate::build_systems::{BuildOutcome, BuildStatus};
use crate::pipeline::context::HookContext;
use crate::pipeline::phase_trait::{HookPhase, PhaseFlow};
use crate::process::CommandOutput;
use crate::progress::ProgressEvent;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{info, warn};

/// Builds every discovered solution once, in discovery order
///
/// A failing build is recorded and the next solution is still attempted.
pub struct BuildPhase;

/// stderr, or stdout when the build wrote nothing to stderr
fn failure_detail(output: &CommandOutput) -> &str {
    let stderr = output.stderr.trim_end();
    if stderr.trim().is_empty() {
        output.stdout.trim_end()
    } else {
        stderr
    }
}

#[async_trait]
impl HookPhase for BuildPhase {
    fn name(&self) -> &'static str {
        "Build"
    }

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow {
        if context.config.skip_build {
            info!("Build verification skipped by configuration");
            return PhaseFlow::Continue;
        }

        let toolchain = context.toolchain();
        let targets = match toolchain.discover(
            context.file_system.as_ref(),
            &context.repo_root,
            &context.config.solution_glob,
        ) {
            Ok(targets) => targets,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Solution discovery failed");
                Vec::new()
            }
        };

        if targets.is_empty() {
            info!(glob = %context.config.solution_glob, "No solution files found");
            return PhaseFlow::Continue;
        }

        let total = targets.len();
        for (index, target) in targets.into_iter().enumerate() {
            let solution = target.path.display().to_string();
            context.emit(ProgressEvent::BuildStarted {
                solution: solution.clone(),
                name: target.display_name(),
                index: index + 1,
                total,
            });

            let started = Instant::now();
            let invocation = toolchain.build_invocation(&target);
            let run = context.runner.run(&invocation).await;

            let status = match run {
                Ok(output) if output.success() => BuildStatus::Succeeded,
                Ok(output) => {
                    context.result.add_error(format!(
                        "Build failed for {}:\n{}",
                        solution,
                        failure_detail(&output)
                    ));
                    BuildStatus::Failed {
                        exit_code: output.exit_code,
                    }
                }
                Err(e) => {
                    context
                        .result
                        .add_error(format!("Failed to build {}: {}", solution, e));
                    BuildStatus::InvocationFailed
                }
            };

            let outcome = BuildOutcome { target, status };
            context.emit(ProgressEvent::BuildComplete {
                solution,
                succeeded: outcome.succeeded(),
                duration: started.elapsed(),
            });
            context.builds.push(outcome);
        }

        PhaseFlow::Continue
    }
}
