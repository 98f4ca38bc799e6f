// src/errors.rs

//! Crate-wide error types and aliases.
//!
//! Two failure kinds exist and stay distinct all the way to the report:
//! a command that ran and exited non-zero carries its code and captured
//! streams, while a command that never started surfaces the underlying
//! IO error. Both map to process exit code 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    /// The external command completed but returned a non-zero status.
    #[error("Command failed with exit code {exit_code}")]
    CommandFailed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// The command could not be dispatched at all (e.g. the `wsl` binary
    /// is missing or the distribution is unavailable).
    #[error("{0}")]
    Invocation(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;
