//! Build toolchains the hook can drive

pub mod dotnet;

pub use dotnet::{BuildOutcome, BuildStatus, BuildTarget, DotNetToolchain};
