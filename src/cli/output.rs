//! Output formatting for hook reports
//!
//! The human format is what a developer sees when a commit is rejected; JSON
//! and YAML serialize the full [`HookReport`] for tooling.
//!
//! When the run was already narrated line by line through
//! [`ConsoleProgress`](super::progress::ConsoleProgress), use
//! [`OutputFormatter::after_live_progress`] so only the summary is printed.
//!
//! # Example
//!
//! ```ignore
//! use dotnet_guard::cli::output::{OutputFormat, OutputFormatter};
//!
//! let formatter = OutputFormatter::new(OutputFormat::Human);
//! print!("{}", formatter.format(&report)?);
//! ```

use anyhow::{Context, Result};

use crate::pipeline::{HookOutcome, HookReport};

const RULE_WIDTH: usize = 70;

pub(crate) const HEADER: &str = "\u{1F50D} Running .NET code analyzer...\n\n";
pub(crate) const BUILDING_HEADER: &str = "\nBuilding solution(s) to verify compilation...\n";

pub(crate) fn validating_line(files: usize) -> String {
    format!("Validating {} C# file(s)...\n", files)
}

/// Printed when a build starts; the mark follows once it ends
pub(crate) fn building_prefix(name: &str) -> String {
    format!("  Building {}... ", name)
}

pub(crate) fn build_mark(succeeded: bool) -> &'static str {
    if succeeded {
        "\u{2713}"
    } else {
        "\u{2717}"
    }
}

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable hook output
    Human,
}

/// Output formatter for hook reports
pub struct OutputFormatter {
    format: OutputFormat,
    live_progress_shown: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            live_progress_shown: false,
        }
    }

    /// Leaves out the lines [`ConsoleProgress`](super::progress::ConsoleProgress)
    /// already printed (header, file count, per-build results)
    pub fn after_live_progress(mut self) -> Self {
        self.live_progress_shown = true;
        self
    }

    pub fn format(&self, report: &HookReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &HookReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize hook report to JSON")
    }

    fn format_yaml(&self, report: &HookReport) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize hook report to YAML")
    }

    fn format_human(&self, report: &HookReport) -> String {
        let mut output = String::new();
        if !self.live_progress_shown {
            output.push_str(HEADER);
        }

        match report.outcome {
            HookOutcome::ToolchainUnavailable => {
                output.push_str("\u{274C} .NET SDK not found\n");
                push_bullets(&mut output, &report.errors);
                return output;
            }
            HookOutcome::NothingStaged => {
                output.push_str("No files to validate.\n");
                return output;
            }
            HookOutcome::NoCandidates => {
                output.push_str(&format!(
                    "Scanned {} staged files, none require .NET validation.\n",
                    report.staged_files
                ));
                return output;
            }
            HookOutcome::Passed | HookOutcome::Blocked => {}
        }

        if !self.live_progress_shown {
            output.push_str(&validating_line(report.candidates.len()));

            if !report.builds.is_empty() {
                output.push_str(BUILDING_HEADER);
                for build in &report.builds {
                    output.push_str(&building_prefix(&build.target.display_name()));
                    output.push_str(build_mark(build.succeeded()));
                    output.push('\n');
                }
            }
        }

        if !report.warnings.is_empty() {
            output.push_str("\n\u{26A0}\u{FE0F}  Warnings:\n");
            push_bullets(&mut output, &report.warnings);
        }

        if !report.errors.is_empty() {
            let rule = "\u{2501}".repeat(RULE_WIDTH);
            output.push_str("\n\u{274C} Validation Errors:\n");
            push_bullets(&mut output, &report.errors);
            output.push('\n');
            output.push_str(&rule);
            output.push_str("\n\u{274C} COMMIT BLOCKED: .NET validation failed\n");
            output.push_str(&rule);
            output.push_str("\n\nTo bypass this check (NOT RECOMMENDED): git commit --no-verify\n");
            return output;
        }

        output.push_str("\n\u{2713} All .NET code validation passed\n");
        output
    }
}

fn push_bullets(output: &mut String, items: &[String]) {
    for item in items {
        output.push_str(&format!("  \u{2022} {}\n", item));
    }
}
