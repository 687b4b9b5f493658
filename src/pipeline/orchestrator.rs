use super::context::HookContext;
use super::phase_trait::{HookPhase, PhaseFlow};
use super::phases::{
    build::BuildPhase, filter::FilterPhase, inspect::InspectPhase, staged::StagedFilesPhase,
    toolchain::ToolchainPhase,
};
use super::report::{HookOutcome, HookReport};
use crate::progress::ProgressEvent;
use std::time::Instant;
use tracing::debug;

/// Runs the hook phases in order until one halts or all complete
pub struct HookOrchestrator {
    phases: Vec<Box<dyn HookPhase>>,
}

impl HookOrchestrator {
    pub fn new() -> Self {
        Self::with_phases(vec![
            Box::new(ToolchainPhase),
            Box::new(StagedFilesPhase),
            Box::new(FilterPhase),
            Box::new(InspectPhase),
            Box::new(BuildPhase),
        ])
    }

    pub fn with_phases(phases: Vec<Box<dyn HookPhase>>) -> Self {
        Self { phases }
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    pub async fn execute(&self, mut context: HookContext) -> HookReport {
        let start = Instant::now();
        context.emit(ProgressEvent::Started {
            repo_path: context.repo_root.display().to_string(),
        });

        for phase in &self.phases {
            context.emit(ProgressEvent::PhaseStarted {
                phase: phase.name().to_string(),
            });

            let phase_start = Instant::now();
            let flow = phase.execute(&mut context).await;

            context.emit(ProgressEvent::PhaseComplete {
                phase: phase.name().to_string(),
                duration: phase_start.elapsed(),
            });

            if let PhaseFlow::Halt(outcome) = flow {
                context.emit(ProgressEvent::Halted {
                    phase: phase.name().to_string(),
                    outcome: outcome.to_string(),
                });
                return Self::finish(outcome, context, start);
            }
            debug!(phase = phase.name(), "Phase complete");
        }

        let outcome = if context.result.has_errors() {
            HookOutcome::Blocked
        } else {
            HookOutcome::Passed
        };
        Self::finish(outcome, context, start)
    }

    fn finish(outcome: HookOutcome, context: HookContext, start: Instant) -> HookReport {
        context.emit(ProgressEvent::Completed {
            warnings: context.result.warnings().len(),
            errors: context.result.errors().len(),
            total_time: start.elapsed(),
        });
        HookReport::from_context(outcome, context)
    }
}

impl Default for HookOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
