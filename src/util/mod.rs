//! Utility modules for dotnet-guard

pub mod logging;
#[cfg(test)]
pub(crate) mod test_env;

pub use logging::{init_logging, LoggingConfig};
