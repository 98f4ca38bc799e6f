// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] defines the `CommandExecutor` trait and the
//!   `ExecutionResult` the runner consumes.
//! - [`wsl`] holds the production executor that dispatches commands through
//!   a WSL distribution, which tests replace with a fake implementation.

pub mod backend;
pub mod wsl;

pub use backend::{CommandExecutor, ExecutionResult};
pub use wsl::WslExecutor;
