use crate::git::list_staged_files;
use crate::pipeline::context::HookContext;
use crate::pipeline::phase_trait::{HookPhase, PhaseFlow};
use crate::pipeline::report::HookOutcome;
use async_trait::async_trait;
use tracing::{error, info};

/// Lists the staged files; a failing git query means nothing to validate
pub struct StagedFilesPhase;

#[async_trait]
impl HookPhase for StagedFilesPhase {
    fn name(&self) -> &'static str {
        "StagedFiles"
    }

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow {
        let listed = list_staged_files(
            context.runner.as_ref(),
            &context.config.git_bin,
            &context.repo_root,
        )
        .await;

        context.staged = match listed {
            Ok(files) => files,
            Err(e) => {
                error!(error = %format!("{:#}", e), "Error getting staged files");
                Vec::new()
            }
        };

        if context.staged.is_empty() {
            info!("No files to validate");
            return PhaseFlow::Halt(HookOutcome::NothingStaged);
        }

        PhaseFlow::Continue
    }
}
