use super::context::HookContext;
use crate::build_systems::BuildOutcome;
use crate::validation::InspectionSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Terminal state of a hook run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookOutcome {
    ToolchainUnavailable,
    NothingStaged,
    NoCandidates,
    Passed,
    Blocked,
}

impl HookOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookOutcome::ToolchainUnavailable => "toolchain_unavailable",
            HookOutcome::NothingStaged => "nothing_staged",
            HookOutcome::NoCandidates => "no_candidates",
            HookOutcome::Passed => "passed",
            HookOutcome::Blocked => "blocked",
        }
    }
}

impl fmt::Display for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the hook found, ready for output
#[derive(Debug, Clone, Serialize)]
pub struct HookReport {
    pub outcome: HookOutcome,
    pub exit_code: i32,
    pub toolchain_version: Option<String>,
    pub staged_files: usize,
    pub candidates: Vec<PathBuf>,
    pub inspection: InspectionSummary,
    pub builds: Vec<BuildOutcome>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl HookReport {
    pub fn from_context(outcome: HookOutcome, context: HookContext) -> Self {
        Self {
            outcome,
            exit_code: context.result.exit_code(),
            toolchain_version: context.toolchain_version,
            staged_files: context.staged.len(),
            candidates: context.candidates,
            inspection: context.inspection,
            builds: context.builds,
            warnings: context.result.warnings().to_vec(),
            errors: context.result.errors().to_vec(),
        }
    }
}
