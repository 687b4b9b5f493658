use crate::pipeline::context::HookContext;
use crate::pipeline::phase_trait::{HookPhase, PhaseFlow};
use crate::progress::ProgressEvent;
use crate::validation::ContentInspector;
use async_trait::async_trait;
use tracing::debug;

pub struct InspectPhase;

#[async_trait]
impl HookPhase for InspectPhase {
    fn name(&self) -> &'static str {
        "Inspect"
    }

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow {
        context.emit(ProgressEvent::InspectionStarted {
            files: context.candidates.len(),
        });

        let inspector = ContentInspector::from_config(&context.config);
        context.inspection = inspector.inspect(
            context.file_system.as_ref(),
            &context.repo_root,
            &context.candidates,
            &mut context.result,
        );

        debug!(
            inspected = context.inspection.inspected,
            missing = context.inspection.missing,
            unreadable = context.inspection.unreadable,
            "Inspection complete"
        );
        PhaseFlow::Continue
    }
}
