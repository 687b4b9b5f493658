use crate::git::StagedFile;
use std::path::{Path, PathBuf};

/// Whether `path` names a source file with the given extension (no dot)
///
/// Decided from the path alone; the file is never touched.
pub fn is_source_file(path: &Path, extension: &str) -> bool {
    path.extension().map_or(false, |ext| ext == extension)
}

/// Staged paths that need inspection, in staged order
pub fn select_candidates(staged: &[StagedFile], extension: &str) -> Vec<PathBuf> {
    staged
        .iter()
        .filter(|f| is_source_file(&f.path, extension))
        .map(|f| f.path.clone())
        .collect()
}
