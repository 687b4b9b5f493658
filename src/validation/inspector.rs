use crate::config::GuardConfig;
use crate::fs::FileSystem;
use crate::validation::rules::{ContentRule, DebugPrintRule, UnimplementedMarkerRule};
use crate::validation::ValidationResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Counts from one inspection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InspectionSummary {
    pub inspected: usize,
    /// Staged, but no longer on disk
    pub missing: usize,
    pub unreadable: usize,
}

/// Runs every content rule over every candidate file
pub struct ContentInspector {
    rules: Vec<Box<dyn ContentRule>>,
}

impl ContentInspector {
    pub fn new() -> Self {
        Self::from_config(&GuardConfig::builtin())
    }

    pub fn with_rules(rules: Vec<Box<dyn ContentRule>>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::with_rules(vec![
            Box::new(UnimplementedMarkerRule::new(&config.unimplemented_marker)),
            Box::new(DebugPrintRule::new(
                &config.debug_print_marker,
                &config.test_path_marker,
            )),
        ])
    }

    /// Inspects `files` (relative to `repo_root`) and records findings
    ///
    /// Missing files are skipped silently. A file that cannot be read becomes
    /// a blocking error and the pass carries on with the next file.
    pub fn inspect(
        &self,
        fs: &dyn FileSystem,
        repo_root: &Path,
        files: &[PathBuf],
        result: &mut ValidationResult,
    ) -> InspectionSummary {
        let mut summary = InspectionSummary::default();

        for file in files {
            let full_path = repo_root.join(file);
            if !fs.exists(&full_path) {
                trace!(file = %file.display(), "Staged file no longer exists, skipping");
                summary.missing += 1;
                continue;
            }
            if !fs.is_file(&full_path) {
                trace!(file = %file.display(), "Staged path is no longer a file, skipping");
                summary.missing += 1;
                continue;
            }

            let content = match fs.read_to_string(&full_path) {
                Ok(content) => content,
                Err(e) => {
                    debug!(file = %file.display(), error = %e, "Failed to read staged file");
                    result.add_error(format!(
                        "{}: Failed to read file: {}",
                        file.display(),
                        e.root_cause()
                    ));
                    summary.unreadable += 1;
                    continue;
                }
            };

            summary.inspected += 1;
            for rule in &self.rules {
                if let Some(message) = rule.check(file, &content) {
                    debug!(file = %file.display(), rule = rule.name(), "Rule fired");
                    result.add_warning(message);
                }
            }
        }

        summary
    }
}

impl Default for ContentInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn repo() -> MockFileSystem {
        MockFileSystem::with_root(PathBuf::from("/repo"))
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_test_path_exemption_scenario() {
        let fs = repo();
        fs.add_file("src/Foo.cs", "Console.WriteLine(\"x\");");
        fs.add_file("src/Foo.Tests/Bar.cs", "Console.WriteLine(\"y\");");

        let mut result = ValidationResult::new();
        let summary = ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Foo.cs", "src/Foo.Tests/Bar.cs"]),
            &mut result,
        );

        assert_eq!(summary.inspected, 2);
        assert_eq!(
            result.warnings(),
            ["src/Foo.cs: Contains Console.WriteLine (use ILogger instead)"]
        );
        assert!(!result.has_errors());
    }

    #[test]
    fn test_test_path_still_gets_marker_warning() {
        let fs = repo();
        fs.add_file(
            "src/Foo.Tests/Bar.cs",
            "// TODO: Implement\nConsole.WriteLine(\"y\");",
        );

        let mut result = ValidationResult::new();
        ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Foo.Tests/Bar.cs"]),
            &mut result,
        );

        assert_eq!(
            result.warnings(),
            ["src/Foo.Tests/Bar.cs: Contains 'TODO: Implement' marker"]
        );
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_both_rules_fire_independently() {
        let fs = repo();
        fs.add_file(
            "src/Service.cs",
            "// TODO: Implement\nConsole.WriteLine(\"debug\");",
        );

        let mut result = ValidationResult::new();
        ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Service.cs"]),
            &mut result,
        );

        assert_eq!(
            result.warnings(),
            [
                "src/Service.cs: Contains 'TODO: Implement' marker",
                "src/Service.cs: Contains Console.WriteLine (use ILogger instead)",
            ]
        );
    }

    #[test]
    fn test_marker_repeated_yields_single_warning() {
        let fs = repo();
        fs.add_file("src/A.cs", "// TODO: Implement\n// TODO: Implement\n");

        let mut result = ValidationResult::new();
        ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/A.cs"]),
            &mut result,
        );

        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_missing_file_is_skipped_silently() {
        let fs = repo();

        let mut result = ValidationResult::new();
        let summary = ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Deleted.cs"]),
            &mut result,
        );

        assert_eq!(summary.missing, 1);
        assert_eq!(result, ValidationResult::new());
    }

    #[test]
    fn test_path_replaced_by_directory_is_skipped() {
        let fs = repo();
        fs.add_dir("src/Moved.cs");

        let mut result = ValidationResult::new();
        let summary = ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Moved.cs"]),
            &mut result,
        );

        assert_eq!(summary.missing, 1);
        assert_eq!(summary.inspected, 0);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_unreadable_file_blocks_and_inspection_continues() {
        let fs = repo();
        fs.add_unreadable("src/Broken.cs", "stream did not contain valid UTF-8");
        fs.add_file("src/Later.cs", "// TODO: Implement");

        let mut result = ValidationResult::new();
        let summary = ContentInspector::new().inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Broken.cs", "src/Later.cs"]),
            &mut result,
        );

        assert_eq!(summary.unreadable, 1);
        assert_eq!(summary.inspected, 1);
        assert_eq!(
            result.errors(),
            ["src/Broken.cs: Failed to read file: stream did not contain valid UTF-8"]
        );
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_custom_rules_from_config() {
        let mut config = GuardConfig::builtin();
        config.debug_print_marker = "Debug.Print".to_string();
        config.test_path_marker = "Specs".to_string();

        let fs = repo();
        fs.add_file("src/Foo.cs", "Debug.Print(1); Console.WriteLine(2);");
        fs.add_file("src/Specs/FooSpec.cs", "Debug.Print(1);");

        let mut result = ValidationResult::new();
        ContentInspector::from_config(&config).inspect(
            &fs,
            Path::new("/repo"),
            &paths(&["src/Foo.cs", "src/Specs/FooSpec.cs"]),
            &mut result,
        );

        assert_eq!(
            result.warnings(),
            ["src/Foo.cs: Contains Debug.Print (use ILogger instead)"]
        );
    }
}
