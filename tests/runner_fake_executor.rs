// tests/runner_fake_executor.rs

use std::sync::{Arc, Mutex};

use gatecheck::errors::GateError;
use gatecheck::runner::GateRunner;
use gatecheck::steps::quality_gates;
use gatecheck_test_utils::fake_executor::FakeExecutor;
use gatecheck_test_utils::{init_tracing, with_timeout};

/// Drive a full gate run against the fake executor, returning the run
/// outcome and everything written to the console sink.
async fn run_gates(executor: FakeExecutor) -> (gatecheck::errors::Result<()>, String) {
    let mut out = Vec::new();
    let mut runner = GateRunner::with_writer(executor, &mut out);

    let result = with_timeout(runner.run(&quality_gates())).await;
    drop(runner);

    (result, String::from_utf8(out).expect("console output is utf-8"))
}

#[tokio::test]
async fn all_gates_pass_in_fixed_order() {
    init_tracing();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let executor = FakeExecutor::new(executed.clone())
        .respond(0, "added 250 packages", "")
        .respond(0, "", "")
        .respond(0, "12 passed", "")
        .respond(0, "", "");

    let (result, output) = run_gates(executor).await;
    result.expect("all gates should pass");

    let commands = executed.lock().unwrap().clone();
    assert_eq!(
        commands,
        vec!["npm install", "npm run build", "npm test", "npm run lint"]
    );

    assert!(output.contains("Running quality gates for freshtrack-pro project..."));
    assert!(output.contains("✓ Dependencies installed successfully"));
    assert!(output.contains("✓ Build completed successfully"));
    assert!(output.contains("✓ All tests passed"));
    assert!(output.contains("✓ No linting issues found"));
    assert_eq!(output.matches("✨ All quality gates passed! ✨").count(), 1);
}

#[tokio::test]
async fn build_failure_stops_the_sequence() {
    init_tracing();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let executor = FakeExecutor::new(executed.clone())
        .respond(0, "", "")
        .respond(2, "partial build output", "tsc: error");

    let (result, output) = run_gates(executor).await;

    match result {
        Err(GateError::CommandFailed {
            exit_code,
            stdout,
            stderr,
        }) => {
            assert_eq!(exit_code, 2);
            assert_eq!(stdout, "partial build output");
            assert_eq!(stderr, "tsc: error");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    // Only install and build were ever dispatched.
    let commands = executed.lock().unwrap().clone();
    assert_eq!(commands, vec!["npm install", "npm run build"]);

    // Install succeeded, build's banner was printed, later steps never were.
    assert!(output.contains("✓ Dependencies installed successfully"));
    assert!(output.contains("Step 2: Running build process..."));
    assert!(!output.contains("Step 3"));
    assert!(!output.contains("test suite"));
    assert!(!output.contains("lint"));
    assert!(!output.contains("✨"));
}

#[tokio::test]
async fn invocation_error_is_kept_distinct_from_command_failure() {
    init_tracing();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let executor =
        FakeExecutor::new(executed.clone()).fail_to_start("wsl: command not found");

    let (result, output) = run_gates(executor).await;

    match result {
        Err(GateError::Invocation(err)) => {
            assert!(err.to_string().contains("wsl: command not found"));
        }
        other => panic!("expected Invocation, got {other:?}"),
    }

    let commands = executed.lock().unwrap().clone();
    assert_eq!(commands, vec!["npm install"]);

    // The failed step announced itself; nothing after it ran.
    assert!(output.contains("Step 1: Installing dependencies..."));
    assert!(!output.contains("Step 2"));
}

#[tokio::test]
async fn captured_stdout_is_printed_before_the_success_line() {
    init_tracing();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let executor = FakeExecutor::new(executed).respond(0, "added 250 packages in 12s", "");

    let (result, output) = run_gates(executor).await;
    result.expect("gates should pass");

    let banner = output
        .find("Step 1: Installing dependencies...")
        .expect("start banner");
    let passthrough = output
        .find("added 250 packages in 12s")
        .expect("captured stdout");
    let confirmation = output
        .find("✓ Dependencies installed successfully")
        .expect("success line");

    assert!(banner < passthrough);
    assert!(passthrough < confirmation);
}

#[tokio::test]
async fn empty_stdout_is_not_passed_through() {
    init_tracing();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let executor = FakeExecutor::new(executed).respond(0, "", "");

    let (result, output) = run_gates(executor).await;
    result.expect("gates should pass");

    // The banner is followed directly by the confirmation, no blank
    // passthrough line in between.
    assert!(output.contains(
        "Step 1: Installing dependencies...\n✓ Dependencies installed successfully\n"
    ));
}
