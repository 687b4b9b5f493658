use super::context::HookContext;
use super::report::HookOutcome;
use async_trait::async_trait;

/// What the orchestrator does after a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseFlow {
    Continue,
    /// Stop here and report with this outcome
    Halt(HookOutcome),
}

/// One step of the hook
///
/// Phases never fail: every problem becomes an entry in `context.result`.
#[async_trait]
pub trait HookPhase: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, context: &mut HookContext) -> PhaseFlow;
}
