use crate::process::{CommandRunner, Invocation};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Change kinds the hook asks git for (`--diff-filter=ACM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Copied,
    Modified,
}

impl ChangeStatus {
    fn from_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'A' => Some(Self::Added),
            'C' => Some(Self::Copied),
            'M' => Some(Self::Modified),
            _ => None,
        }
    }
}

/// A path recorded in the index as part of the pending commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    /// Relative to the repository root, as git reports it
    pub path: PathBuf,
    pub status: ChangeStatus,
}

pub fn staged_files_invocation(git_bin: &str, repo_root: &Path) -> Invocation {
    Invocation::new(
        git_bin,
        ["diff", "--cached", "--name-status", "-z", "--diff-filter=ACM"],
    )
    .in_dir(repo_root)
}

/// Parses `git diff --name-status -z` output, preserving git's order
///
/// Records are `status NUL path NUL`; copy and rename records carry a source
/// and a destination path, of which the destination is kept.
pub fn parse_name_status(output: &str) -> Vec<StagedFile> {
    let mut fields = output.split('\0').filter(|f| !f.is_empty());
    let mut files = Vec::new();

    while let Some(code) = fields.next() {
        let two_paths = code.starts_with('C') || code.starts_with('R');
        let path = if two_paths {
            fields.next();
            fields.next()
        } else {
            fields.next()
        };
        let Some(path) = path else {
            trace!(code, "Truncated name-status record");
            break;
        };

        match ChangeStatus::from_code(code) {
            Some(status) => files.push(StagedFile {
                path: PathBuf::from(path),
                status,
            }),
            None => trace!(code, path, "Ignoring unexpected change status"),
        }
    }

    files
}

/// Lists staged added/copied/modified files
///
/// # Errors
///
/// Fails when git cannot be started or exits non-zero (e.g. outside a
/// repository). Callers decide whether that is fatal.
pub async fn list_staged_files(
    runner: &dyn CommandRunner,
    git_bin: &str,
    repo_root: &Path,
) -> Result<Vec<StagedFile>> {
    let invocation = staged_files_invocation(git_bin, repo_root);
    let output = runner
        .run(&invocation)
        .await
        .context("Failed to query staged files")?;

    if !output.success() {
        return Err(anyhow!(
            "`{}` exited with {:?}: {}",
            invocation,
            output.exit_code,
            output.stderr.trim()
        ));
    }

    let files = parse_name_status(&output.stdout);
    debug!(count = files.len(), "Staged files listed");
    Ok(files)
}
