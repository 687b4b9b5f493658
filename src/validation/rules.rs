use std::path::Path;

/// A plain-text check over one source file
///
/// Rules are substring heuristics; they never parse C#.
pub trait ContentRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Advisory message for `path`, or `None` when the rule does not fire
    fn check(&self, path: &Path, content: &str) -> Option<String>;
}

/// Flags unfinished code left behind a marker such as `TODO: Implement`
pub struct UnimplementedMarkerRule {
    marker: String,
}

impl UnimplementedMarkerRule {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl ContentRule for UnimplementedMarkerRule {
    fn name(&self) -> &'static str {
        "UnimplementedMarker"
    }

    fn check(&self, path: &Path, content: &str) -> Option<String> {
        content
            .contains(&self.marker)
            .then(|| format!("{}: Contains '{}' marker", path.display(), self.marker))
    }
}

/// Flags console debug output outside test code
///
/// The test exemption is a substring match on the path, so `src/FooTests.cs`
/// and `src/Tests/Foo.cs` are both exempt.
pub struct DebugPrintRule {
    marker: String,
    test_path_marker: String,
}

impl DebugPrintRule {
    pub fn new(marker: impl Into<String>, test_path_marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            test_path_marker: test_path_marker.into(),
        }
    }

    fn is_test_path(&self, path: &Path) -> bool {
        path.to_string_lossy().contains(&self.test_path_marker)
    }
}

impl ContentRule for DebugPrintRule {
    fn name(&self) -> &'static str {
        "DebugPrint"
    }

    fn check(&self, path: &Path, content: &str) -> Option<String> {
        if !content.contains(&self.marker) || self.is_test_path(path) {
            return None;
        }
        Some(format!(
            "{}: Contains {} (use ILogger instead)",
            path.display(),
            self.marker
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_rule() -> UnimplementedMarkerRule {
        UnimplementedMarkerRule::new("TODO: Implement")
    }

    fn print_rule() -> DebugPrintRule {
        DebugPrintRule::new("Console.WriteLine", "Tests")
    }

    #[test]
    fn test_unimplemented_marker_fires() {
        let message = todo_rule().check(
            Path::new("src/Service.cs"),
            "public void Run() { // TODO: Implement\n}",
        );
        assert_eq!(
            message.as_deref(),
            Some("src/Service.cs: Contains 'TODO: Implement' marker")
        );
    }

    #[test]
    fn test_unimplemented_marker_is_case_sensitive() {
        assert!(todo_rule()
            .check(Path::new("src/Service.cs"), "// todo: implement")
            .is_none());
        assert!(todo_rule()
            .check(Path::new("src/Service.cs"), "// TODO: refactor")
            .is_none());
    }

    #[test]
    fn test_debug_print_fires_outside_tests() {
        let message = print_rule().check(Path::new("src/Foo.cs"), "Console.WriteLine(\"x\");");
        assert_eq!(
            message.as_deref(),
            Some("src/Foo.cs: Contains Console.WriteLine (use ILogger instead)")
        );
    }

    #[test]
    fn test_debug_print_exempt_in_test_paths() {
        let rule = print_rule();
        let content = "Console.WriteLine(\"y\");";

        assert!(rule.check(Path::new("src/Foo.Tests/Bar.cs"), content).is_none());
        assert!(rule.check(Path::new("tests/Tests.cs"), content).is_none());
        assert!(rule.check(Path::new("src/FooTests.cs"), content).is_none());
    }

    #[test]
    fn test_debug_print_exemption_is_case_sensitive() {
        let message = print_rule().check(Path::new("src/tests/Bar.cs"), "Console.WriteLine();");
        assert!(message.is_some());
    }

    #[test]
    fn test_debug_print_absent() {
        assert!(print_rule()
            .check(Path::new("src/Foo.cs"), "logger.LogInformation(\"x\");")
            .is_none());
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(todo_rule().name(), "UnimplementedMarker");
        assert_eq!(print_rule().name(), "DebugPrint");
    }
}
