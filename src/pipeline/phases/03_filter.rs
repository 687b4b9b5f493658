use crate::pipeline::context::HookContext;
use crate::pipeline::phase_trait::{HookPhase, PhaseFlow};
use crate::pipeline::report::HookOutcome;
use crate::validation::select_candidates;
use async_trait::async_trait;
use tracing::info;

pub struct FilterPhase;

#[async_trait]
impl HookPhase for FilterPhase {
    fn name(&self) -> &'static str {
        "Filter"
    }

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow {
        context.candidates = select_candidates(&context.staged, &context.config.source_extension);

        if context.candidates.is_empty() {
            info!(
                staged = context.staged.len(),
                "No staged files require .NET validation"
            );
            return PhaseFlow::Halt(HookOutcome::NoCandidates);
        }

        info!(count = context.candidates.len(), "Validating C# files");
        PhaseFlow::Continue
    }
}
