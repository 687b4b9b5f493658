pub mod context;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod report;

pub use context::HookContext;
pub use orchestrator::HookOrchestrator;
pub use phase_trait::{HookPhase, PhaseFlow};
pub use report::{HookOutcome, HookReport};
