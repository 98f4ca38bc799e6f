// src/exec/wsl.rs

//! Production executor: dispatches commands into a WSL distribution.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;

use super::backend::{CommandExecutor, ExecutionResult};

/// Runs each command inside a fixed WSL distribution and working directory.
///
/// A command is dispatched as
/// `wsl -d <distro> -e bash -c "cd <workdir> && <command>"` and awaited to
/// completion with both streams captured. No timeout is applied; a hung
/// command hangs the caller.
#[derive(Debug, Clone)]
pub struct WslExecutor {
    distro: String,
    workdir: String,
}

impl WslExecutor {
    pub fn new(distro: impl Into<String>, workdir: impl Into<String>) -> Self {
        Self {
            distro: distro.into(),
            workdir: workdir.into(),
        }
    }

    /// Full argv for one command, `wsl` binary first.
    fn shell_invocation(&self, command: &str) -> Vec<String> {
        vec![
            "wsl".to_string(),
            "-d".to_string(),
            self.distro.clone(),
            "-e".to_string(),
            "bash".to_string(),
            "-c".to_string(),
            format!("cd {} && {}", self.workdir, command),
        ]
    }
}

impl CommandExecutor for WslExecutor {
    fn execute(
        &mut self,
        command: &str,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>> {
        let argv = self.shell_invocation(command);

        Box::pin(async move {
            debug!(?argv, "dispatching command to WSL");

            // Spawn errors (missing `wsl`, unreachable distro) bubble up as
            // invocation errors; a non-zero exit is a normal result.
            let output = Command::new(&argv[0]).args(&argv[1..]).output().await?;

            let result = ExecutionResult {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            };

            info!(exit_code = result.exit_code, "command exited");
            Ok(result)
        })
    }
}
