//! FileSystem abstraction for testable file operations

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::FileSystem;
pub use real::RealFileSystem;

use anyhow::{Context, Result};
use ignore::overrides::{Override, OverrideBuilder};
use std::path::{Path, PathBuf};

const GLOB_META: &[char] = &['*', '?', '[', '{', '\\'];

/// Compiles `pattern` into a whitelist matcher anchored at `root`
pub(crate) fn glob_matcher(root: &Path, pattern: &str) -> Result<Override> {
    let mut builder = OverrideBuilder::new(root);
    builder
        .add(pattern)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
    builder
        .build()
        .with_context(|| format!("Failed to compile glob pattern: {}", pattern))
}

/// Leading directory components of `pattern` that contain no glob syntax
pub(crate) fn literal_prefix(pattern: &str) -> PathBuf {
    let mut components: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
    // the final component names files, never a directory to descend from
    components.pop();

    components
        .into_iter()
        .take_while(|c| !c.is_empty() && !c.contains(GLOB_META))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("dotnet/**/*.sln"), PathBuf::from("dotnet"));
        assert_eq!(literal_prefix("dotnet/src/*.sln"), PathBuf::from("dotnet/src"));
        assert_eq!(literal_prefix("**/*.sln"), PathBuf::new());
        assert_eq!(literal_prefix("App.sln"), PathBuf::new());
        assert_eq!(literal_prefix("/dotnet/*.sln"), PathBuf::from("dotnet"));
    }

    #[test]
    fn test_glob_matcher_anchors_at_root() {
        let matcher = glob_matcher(Path::new("/repo"), "dotnet/**/*.sln").unwrap();

        assert!(matcher
            .matched("/repo/dotnet/App.sln", false)
            .is_whitelist());
        assert!(matcher
            .matched("/repo/dotnet/nested/deeper/App.sln", false)
            .is_whitelist());
        assert!(!matcher.matched("/repo/other/App.sln", false).is_whitelist());
        assert!(!matcher.matched("/repo/dotnet/App.csproj", false).is_whitelist());
    }

    #[test]
    fn test_glob_matcher_rejects_invalid_pattern() {
        assert!(glob_matcher(Path::new("/repo"), "dotnet/[*.sln").is_err());
    }
}
