//! Configuration management for dotnet-guard
//!
//! Settings are loaded from environment variables with sensible defaults and can
//! be overridden from the command line before the hook runs.
//!
//! # Environment Variables
//!
//! - `DOTNET_GUARD_DOTNET_BIN`: .NET CLI binary - default: "dotnet"
//! - `DOTNET_GUARD_GIT_BIN`: git binary - default: "git"
//! - `DOTNET_GUARD_SOURCE_EXTENSION`: source file extension, without the dot - default: "cs"
//! - `DOTNET_GUARD_UNIMPLEMENTED_MARKER`: advisory marker - default: "TODO: Implement"
//! - `DOTNET_GUARD_DEBUG_PRINT_MARKER`: advisory debug print call - default: "Console.WriteLine"
//! - `DOTNET_GUARD_TEST_PATH_MARKER`: paths containing this are exempt from the debug
//!   print check - default: "Tests"
//! - `DOTNET_GUARD_SOLUTION_GLOB`: glob for solution discovery, relative to the
//!   repository root - default: "dotnet/**/*.sln"
//! - `DOTNET_GUARD_SKIP_BUILD`: skip the build phase (true|false) - default: "false"
//! - `DOTNET_GUARD_LOG_LEVEL`: logging level - default: "warn"
//!
//! # Example
//!
//! ```no_run
//! use dotnet_guard::GuardConfig;
//!
//! let mut config = GuardConfig::default();
//! config.skip_build = true;
//! config.validate().expect("Invalid configuration");
//! ```

use crate::util::logging::parse_level;
use ignore::overrides::OverrideBuilder;
use std::env;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_DOTNET_BIN: &str = "dotnet";
pub const DEFAULT_GIT_BIN: &str = "git";
pub const DEFAULT_SOURCE_EXTENSION: &str = "cs";
pub const DEFAULT_UNIMPLEMENTED_MARKER: &str = "TODO: Implement";
pub const DEFAULT_DEBUG_PRINT_MARKER: &str = "Console.WriteLine";
pub const DEFAULT_TEST_PATH_MARKER: &str = "Tests";
pub const DEFAULT_SOLUTION_GLOB: &str = "dotnet/**/*.sln";
const DEFAULT_SKIP_BUILD: bool = false;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was set to an empty string
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// The solution glob could not be compiled
    #[error("Invalid solution glob '{glob}': {error}")]
    InvalidGlob { glob: String, error: String },
}

/// Runtime configuration for the pre-commit hook
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// .NET CLI used for the version check and builds
    pub dotnet_bin: String,

    /// git binary used to list staged files
    pub git_bin: String,

    /// Extension of source files to inspect, without the leading dot
    pub source_extension: String,

    /// Substring flagging unfinished code
    pub unimplemented_marker: String,

    /// Substring flagging console debug output
    pub debug_print_marker: String,

    /// Path substring exempting a file from the debug print check
    pub test_path_marker: String,

    /// Glob matching build descriptors, anchored at the repository root
    pub solution_glob: String,

    /// Skip solution discovery and builds entirely
    pub skip_build: bool,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Default for GuardConfig {
    /// Loads `DOTNET_GUARD_*` environment variables, falling back to defaults
    fn default() -> Self {
        let skip_build = env::var("DOTNET_GUARD_SKIP_BUILD")
            .ok()
            .and_then(|v| v.to_lowercase().parse::<bool>().ok())
            .unwrap_or(DEFAULT_SKIP_BUILD);

        Self {
            dotnet_bin: env_or("DOTNET_GUARD_DOTNET_BIN", DEFAULT_DOTNET_BIN),
            git_bin: env_or("DOTNET_GUARD_GIT_BIN", DEFAULT_GIT_BIN),
            source_extension: env_or("DOTNET_GUARD_SOURCE_EXTENSION", DEFAULT_SOURCE_EXTENSION),
            unimplemented_marker: env_or(
                "DOTNET_GUARD_UNIMPLEMENTED_MARKER",
                DEFAULT_UNIMPLEMENTED_MARKER,
            ),
            debug_print_marker: env_or(
                "DOTNET_GUARD_DEBUG_PRINT_MARKER",
                DEFAULT_DEBUG_PRINT_MARKER,
            ),
            test_path_marker: env_or("DOTNET_GUARD_TEST_PATH_MARKER", DEFAULT_TEST_PATH_MARKER),
            solution_glob: env_or("DOTNET_GUARD_SOLUTION_GLOB", DEFAULT_SOLUTION_GLOB),
            skip_build,
            log_level: env_or("DOTNET_GUARD_LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
        }
    }
}

impl GuardConfig {
    /// Built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            dotnet_bin: DEFAULT_DOTNET_BIN.to_string(),
            git_bin: DEFAULT_GIT_BIN.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            unimplemented_marker: DEFAULT_UNIMPLEMENTED_MARKER.to_string(),
            debug_print_marker: DEFAULT_DEBUG_PRINT_MARKER.to_string(),
            test_path_marker: DEFAULT_TEST_PATH_MARKER.to_string(),
            solution_glob: DEFAULT_SOLUTION_GLOB.to_string(),
            skip_build: DEFAULT_SKIP_BUILD,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for empty values, an extension written with a
    /// leading dot, a glob that does not compile, or an unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("dotnet_bin", &self.dotnet_bin),
            ("git_bin", &self.git_bin),
            ("source_extension", &self.source_extension),
            ("unimplemented_marker", &self.unimplemented_marker),
            ("debug_print_marker", &self.debug_print_marker),
            ("test_path_marker", &self.test_path_marker),
            ("solution_glob", &self.solution_glob),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue { field });
            }
        }

        if self.source_extension.starts_with('.') {
            return Err(ConfigError::ValidationFailed(format!(
                "Source extension must not start with a dot: {}",
                self.source_extension
            )));
        }

        let mut builder = OverrideBuilder::new(".");
        builder
            .add(&self.solution_glob)
            .map_err(|e| ConfigError::InvalidGlob {
                glob: self.solution_glob.clone(),
                error: e.to_string(),
            })?;

        parse_level(&self.log_level)?;

        Ok(())
    }
}

impl fmt::Display for GuardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dotnet-guard Configuration:")?;
        writeln!(f, "  dotnet: {}", self.dotnet_bin)?;
        writeln!(f, "  git: {}", self.git_bin)?;
        writeln!(f, "  Source Extension: .{}", self.source_extension)?;
        writeln!(f, "  Unimplemented Marker: {}", self.unimplemented_marker)?;
        writeln!(f, "  Debug Print Marker: {}", self.debug_print_marker)?;
        writeln!(f, "  Test Path Marker: {}", self.test_path_marker)?;
        writeln!(f, "  Solution Glob: {}", self.solution_glob)?;
        writeln!(f, "  Skip Build: {}", self.skip_build)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
