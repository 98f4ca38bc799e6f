// src/exec/backend.rs

//! Pluggable command executor abstraction.
//!
//! The runner talks to a `CommandExecutor` instead of spawning processes
//! directly. This makes it easy to swap in a fake executor in tests while
//! keeping the production WSL implementation in [`wsl`](super::wsl).

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// Captured outcome of one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how a step command is executed.
///
/// Production code uses [`WslExecutor`](super::WslExecutor); tests can
/// provide their own implementation that doesn't spawn real processes.
///
/// A process that ran to completion is always reported as an
/// `ExecutionResult`, even with a non-zero status; only a failure to
/// dispatch the command at all surfaces as `Err`.
pub trait CommandExecutor: Send {
    /// Dispatch the given command and wait for it to finish, capturing
    /// both output streams as text.
    fn execute(
        &mut self,
        command: &str,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>>;
}
