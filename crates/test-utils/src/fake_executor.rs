use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gatecheck::errors::{GateError, Result};
use gatecheck::exec::{CommandExecutor, ExecutionResult};

/// One scripted reply of the fake executor.
pub enum ScriptedResponse {
    /// The command "ran" and completed with this result.
    Complete(ExecutionResult),
    /// The command could not be started at all.
    FailToStart(String),
}

/// A fake executor that:
/// - records each command it is asked to run
/// - pops the next scripted response for it.
///
/// An exhausted script replies with a clean zero-exit result, so tests only
/// script the interesting steps.
pub struct FakeExecutor {
    responses: VecDeque<ScriptedResponse>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            responses: VecDeque::new(),
            executed,
        }
    }

    /// Queue a completed process with the given exit code and streams.
    pub fn respond(mut self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses
            .push_back(ScriptedResponse::Complete(ExecutionResult {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }));
        self
    }

    /// Queue an invocation-level failure (the command never starts).
    pub fn fail_to_start(mut self, message: &str) -> Self {
        self.responses
            .push_back(ScriptedResponse::FailToStart(message.to_string()));
        self
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute(
        &mut self,
        command: &str,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>> {
        let command = command.to_string();
        let response = self.responses.pop_front();
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            executed.lock().unwrap().push(command);

            match response {
                Some(ScriptedResponse::Complete(result)) => Ok(result),
                Some(ScriptedResponse::FailToStart(msg)) => Err(GateError::Invocation(
                    io::Error::new(io::ErrorKind::NotFound, msg),
                )),
                None => Ok(ExecutionResult {
                    exit_code: 0,
                    stdout: String::new(),
                    stderr: String::new(),
                }),
            }
        })
    }
}
