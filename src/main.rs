use dotnet_guard::cli::commands::CliArgs;
use dotnet_guard::cli::handlers::handle_run;
use dotnet_guard::util::logging::{init_logging, LoggingConfig};
use dotnet_guard::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    // an unknown level is reported by handle_run's config validation
    let logging = LoggingConfig::resolve(args.log_level.as_deref(), args.verbose, args.quiet)
        .unwrap_or_default();
    init_logging(logging);

    debug!("dotnet-guard v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_run(&args).await;

    std::process::exit(exit_code);
}
