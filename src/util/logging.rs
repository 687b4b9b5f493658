//! Log setup for the hook binary
//!
//! Everything is written to stderr: stdout carries the hook report, which
//! must stay parseable when `--format json` or `--format yaml` is used.
//!
//! ```no_run
//! use dotnet_guard::util::logging::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::resolve(None, true, false).unwrap_or_default());
//! tracing::debug!(file = "src/Foo.cs", "Inspecting file");
//! ```

use crate::config::ConfigError;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const LEVEL_VAR: &str = "DOTNET_GUARD_LOG_LEVEL";
const JSON_VAR: &str = "DOTNET_GUARD_LOG_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    /// One JSON object per line instead of the compact console layout
    pub use_json: bool,
    pub include_target: bool,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Applies the hook's precedence: `--log-level`, then `-v` / `-q`, then
    /// `DOTNET_GUARD_LOG_LEVEL`, then `warn`
    ///
    /// `DOTNET_GUARD_LOG_JSON=true` switches to JSON lines.
    ///
    /// # Errors
    ///
    /// An unknown level name is rejected with the same error
    /// [`GuardConfig::validate`](crate::GuardConfig::validate) reports.
    pub fn resolve(
        log_level: Option<&str>,
        verbose: bool,
        quiet: bool,
    ) -> Result<Self, ConfigError> {
        let level = match log_level {
            Some(explicit) => parse_level(explicit)?,
            None if verbose => Level::DEBUG,
            None if quiet => Level::ERROR,
            None => match env::var(LEVEL_VAR) {
                Ok(value) => parse_level(&value)?,
                Err(_) => Level::WARN,
            },
        };

        Ok(Self {
            level,
            use_json: json_from_env(),
            // locations only help when chasing a problem in the hook itself
            include_location: level >= Level::DEBUG,
            ..Self::default()
        })
    }
}

/// Case-insensitive level name, one of trace, debug, info, warn or error
///
/// ```
/// use dotnet_guard::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("Debug").unwrap(), Level::DEBUG);
/// assert!(parse_level("loud").is_err());
/// ```
pub fn parse_level(name: &str) -> Result<Level, ConfigError> {
    match name.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::ValidationFailed(format!(
            "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
            name
        ))),
    }
}

/// `RUST_LOG` wins outright; otherwise only this crate logs, at `level`
fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let filter = EnvFilter::default();
    match format!("dotnet_guard={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global subscriber; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);
        let registry = tracing_subscriber::registry().with(build_filter(config.level));

        if config.use_json {
            registry.with(layer.json()).init();
        } else {
            registry.with(layer.compact()).init();
        }
    });
}

pub fn json_from_env() -> bool {
    env::var(JSON_VAR)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_env::EnvGuard;
    use serial_test::serial;

    fn resolved_level(log_level: Option<&str>, verbose: bool, quiet: bool) -> Level {
        LoggingConfig::resolve(log_level, verbose, quiet)
            .unwrap()
            .level
    }

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_level("ERROR").unwrap(), Level::ERROR);
        assert_eq!(parse_level(" info ").unwrap(), Level::INFO);
        assert!(parse_level("").is_err());
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("3").is_err());
    }

    #[test]
    fn test_default_is_quiet_console() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.use_json);
        assert!(!config.include_location);
    }

    #[test]
    #[serial]
    fn test_explicit_level_beats_flags_and_env() {
        let _level = EnvGuard::set(LEVEL_VAR, "error");
        assert_eq!(resolved_level(Some("info"), true, false), Level::INFO);
    }

    #[test]
    #[serial]
    fn test_flags_beat_env() {
        let _level = EnvGuard::set(LEVEL_VAR, "info");

        let verbose = LoggingConfig::resolve(None, true, false).unwrap();
        assert_eq!(verbose.level, Level::DEBUG);
        assert!(verbose.include_location);

        assert_eq!(resolved_level(None, false, true), Level::ERROR);
    }

    #[test]
    #[serial]
    fn test_env_then_default() {
        let unset = EnvGuard::remove(LEVEL_VAR);
        assert_eq!(resolved_level(None, false, false), Level::WARN);
        drop(unset);

        let _level = EnvGuard::set(LEVEL_VAR, "trace");
        assert_eq!(resolved_level(None, false, false), Level::TRACE);
    }

    #[test]
    #[serial]
    fn test_unknown_level_is_rejected_like_config_validation() {
        let _level = EnvGuard::set(LEVEL_VAR, "loud");

        let logging_err = LoggingConfig::resolve(None, false, false).unwrap_err();
        let config_err = crate::GuardConfig::default().validate().unwrap_err();
        assert_eq!(logging_err.to_string(), config_err.to_string());
        assert!(LoggingConfig::resolve(Some("loud"), false, false).is_err());
    }

    #[test]
    #[serial]
    fn test_json_from_env() {
        let unset = EnvGuard::remove(JSON_VAR);
        assert!(!json_from_env());
        drop(unset);

        let _json = EnvGuard::set(JSON_VAR, "TRUE");
        assert!(json_from_env());
        assert!(LoggingConfig::resolve(None, false, false).unwrap().use_json);
    }
}
