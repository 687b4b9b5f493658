pub mod commands;
pub mod handlers;
pub mod output;
pub mod progress;

pub use commands::{CliArgs, OutputFormatArg};
pub use handlers::{build_config, handle_run, run_hook};
pub use output::{OutputFormat, OutputFormatter};
pub use progress::ConsoleProgress;
