// src/runner.rs

//! The quality gate runner.
//!
//! Drives the fixed step sequence through a [`CommandExecutor`], strictly in
//! order and fail-fast: the first failing step aborts the run and later
//! steps are never dispatched. All progress output goes through an injected
//! writer so tests can assert the console contract byte for byte.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::errors::{GateError, Result};
use crate::exec::CommandExecutor;
use crate::steps::{PROJECT_NAME, Step};

pub struct GateRunner<E, W> {
    executor: E,
    out: W,
}

impl<E: CommandExecutor> GateRunner<E, io::Stdout> {
    /// Production runner writing to stdout.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            out: io::stdout(),
        }
    }
}

impl<E: CommandExecutor, W: Write> GateRunner<E, W> {
    /// Runner with a custom output sink, used by tests.
    pub fn with_writer(executor: E, out: W) -> Self {
        Self { executor, out }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// Returns `Ok(())` only if all steps succeeded; the caller prints the
    /// failure report via [`report_failure`] and exits 1 otherwise.
    pub async fn run(&mut self, steps: &[Step]) -> Result<()> {
        writeln!(self.out, "Running quality gates for {PROJECT_NAME} project...")?;
        writeln!(self.out)?;

        for (idx, step) in steps.iter().enumerate() {
            self.run_step(idx + 1, step).await?;
        }

        writeln!(self.out, "✨ All quality gates passed! ✨")?;
        Ok(())
    }

    async fn run_step(&mut self, number: usize, step: &Step) -> Result<()> {
        writeln!(self.out, "Step {number}: {}...", step.description)?;
        info!(step = step.name, cmd = step.command, "running step");

        let result = self.executor.execute(step.command).await?;

        if !result.success() {
            warn!(
                step = step.name,
                exit_code = result.exit_code,
                "step failed; aborting remaining gates"
            );
            return Err(GateError::CommandFailed {
                exit_code: result.exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
            });
        }

        // Captured output is passed through before the confirmation line.
        if !result.stdout.is_empty() {
            writeln!(self.out, "{}", result.stdout)?;
        }
        writeln!(self.out, "✓ {}", step.success_message)?;
        writeln!(self.out)?;

        info!(step = step.name, "step succeeded");
        Ok(())
    }
}

/// Print the failure report for a run.
///
/// A command failure carries its exit code and captured streams; any other
/// error is summarised from its description. Both exit 1 in `main`.
pub fn report_failure<W: Write>(err: &GateError, out: &mut W) -> io::Result<()> {
    match err {
        GateError::CommandFailed {
            exit_code,
            stdout,
            stderr,
        } => {
            writeln!(out, "Error: Command failed with exit code {exit_code}")?;
            if !stdout.is_empty() {
                writeln!(out)?;
                writeln!(out, "Output:")?;
                writeln!(out, "{stdout}")?;
            }
            if !stderr.is_empty() {
                writeln!(out)?;
                writeln!(out, "Error:")?;
                writeln!(out, "{stderr}")?;
            }
        }
        other => {
            writeln!(out, "Error: {other}")?;
        }
    }
    Ok(())
}
