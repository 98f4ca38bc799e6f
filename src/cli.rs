// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The four gate commands and the target working directory are fixed
//! constants; the CLI only controls diagnostics.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gatecheck`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gatecheck",
    version,
    about = "Run the freshtrack-pro quality gates (install, build, test, lint) inside WSL.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GATECHECK_LOG` or a default level will be used.
    /// Diagnostics go to stderr; gate output on stdout is unaffected.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
