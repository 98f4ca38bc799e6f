// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod runner;
pub mod steps;

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::exec::WslExecutor;
use crate::runner::GateRunner;
use crate::steps::quality_gates;

/// WSL distribution the gate commands are dispatched into.
pub const WSL_DISTRO: &str = "Ubuntu";

/// Working directory of the target project inside the distribution.
pub const PROJECT_DIR: &str = "/home/skynet/freshtrack-pro-local/fresh-staged";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the fixed step table
/// - the production WSL executor
/// - the gate runner writing to stdout
pub async fn run(args: CliArgs) -> Result<()> {
    debug!(?args, "starting quality gate run");

    let executor = WslExecutor::new(WSL_DISTRO, PROJECT_DIR);
    let mut runner = GateRunner::new(executor);
    runner.run(&quality_gates()).await
}
