//! State threaded through the hook phases

use std::path::PathBuf;
use std::sync::Arc;

use crate::build_systems::{BuildOutcome, DotNetToolchain};
use crate::config::GuardConfig;
use crate::fs::FileSystem;
use crate::git::StagedFile;
use crate::process::CommandRunner;
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use crate::validation::{InspectionSummary, ValidationResult};

/// Everything one hook run reads and produces
///
/// Phases receive `&mut HookContext`; the `result` accumulator is the only
/// place errors and warnings are recorded.
pub struct HookContext {
    pub repo_root: PathBuf,
    pub config: GuardConfig,
    pub runner: Arc<dyn CommandRunner>,
    pub file_system: Arc<dyn FileSystem>,
    pub progress: Arc<dyn ProgressHandler>,

    pub result: ValidationResult,
    pub toolchain_version: Option<String>,
    pub staged: Vec<StagedFile>,
    pub candidates: Vec<PathBuf>,
    pub inspection: InspectionSummary,
    pub builds: Vec<BuildOutcome>,
}

impl HookContext {
    pub fn new(
        repo_root: PathBuf,
        config: GuardConfig,
        runner: Arc<dyn CommandRunner>,
        file_system: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            repo_root,
            config,
            runner,
            file_system,
            progress: Arc::new(NoOpHandler),
            result: ValidationResult::new(),
            toolchain_version: None,
            staged: Vec::new(),
            candidates: Vec::new(),
            inspection: InspectionSummary::default(),
            builds: Vec::new(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHandler>) -> Self {
        self.progress = progress;
        self
    }

    pub fn toolchain(&self) -> DotNetToolchain {
        DotNetToolchain::new(&self.config.dotnet_bin)
    }

    pub fn emit(&self, event: ProgressEvent) {
        self.progress.on_progress(&event);
    }
}
