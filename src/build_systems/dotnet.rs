//! .NET toolchain (C#, F#, VB): version check, solution discovery and builds

use crate::fs::FileSystem;
use crate::process::Invocation;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A solution file found by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
    pub path: PathBuf,
}

impl BuildTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory the build runs in
    pub fn working_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BuildStatus {
    Succeeded,
    Failed { exit_code: Option<i32> },
    /// `dotnet` could not be started for this target
    InvocationFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub target: BuildTarget,
    pub status: BuildStatus,
}

impl BuildOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == BuildStatus::Succeeded
    }
}

pub struct DotNetToolchain {
    binary: String,
}

impl DotNetToolchain {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn version_invocation(&self, repo_root: &Path) -> Invocation {
        Invocation::new(&self.binary, ["--version"]).in_dir(repo_root)
    }

    /// `dotnet build <sln> --no-restore -v quiet`, run from the solution's directory
    pub fn build_invocation(&self, target: &BuildTarget) -> Invocation {
        let args = vec![
            "build".to_string(),
            target.path.to_string_lossy().into_owned(),
            "--no-restore".to_string(),
            "-v".to_string(),
            "quiet".to_string(),
        ];
        Invocation::new(&self.binary, args).in_dir(target.working_dir())
    }

    /// Solution files under `repo_root` matching `glob`, in path order
    pub fn discover(
        &self,
        fs: &dyn FileSystem,
        repo_root: &Path,
        glob: &str,
    ) -> Result<Vec<BuildTarget>> {
        let paths = fs
            .glob(repo_root, glob)
            .with_context(|| format!("Failed to discover solutions with '{}'", glob))?;
        Ok(paths.into_iter().map(BuildTarget::new).collect())
    }
}

/// First line of `dotnet --version` output
pub fn parse_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
