use super::FileSystem;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn glob(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = super::glob_matcher(root, pattern)?;

        let start = root.join(super::literal_prefix(pattern));
        if !start.is_dir() {
            trace!(start = %start.display(), "Glob start directory does not exist");
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for result in WalkBuilder::new(&start)
            .standard_filters(false)
            .overrides(matcher)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            if entry.file_type().map_or(false, |t| t.is_file()) {
                matches.push(entry.into_path());
            }
        }

        Ok(matches)
    }
}
