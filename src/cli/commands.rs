use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Pre-commit hook that blocks commits of .NET code that does not build
#[derive(Parser, Debug)]
#[command(
    name = "dotnet-guard",
    about = "Pre-commit validation for staged C# files",
    version,
    long_about = "dotnet-guard checks that the .NET SDK is installed, scans staged C# files for \
                  unfinished code and console debug output, and builds every solution under \
                  dotnet/. Failed builds and unreadable files block the commit; findings in \
                  file contents are reported as warnings.\n\n\
                  Examples:\n  \
                  dotnet-guard\n  \
                  dotnet-guard --skip-build\n  \
                  dotnet-guard --format json\n  \
                  dotnet-guard --repo /path/to/repo --solution-glob 'src/**/*.sln'"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Repository root (defaults to current directory)"
    )]
    pub repo: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Skip solution discovery and builds")]
    pub skip_build: bool,

    #[arg(
        long,
        value_name = "GLOB",
        help = "Glob for solution files, relative to the repository root"
    )]
    pub solution_glob: Option<String>,

    #[arg(long, value_name = "BIN", help = ".NET CLI binary")]
    pub dotnet: Option<String>,

    #[arg(long, value_name = "BIN", help = "git binary")]
    pub git: Option<String>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
