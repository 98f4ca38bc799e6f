// src/steps.rs

//! The fixed quality-gate step table.
//!
//! The gates are data, not code: the runner iterates whatever slice it is
//! handed, so adding or removing a gate is a change here only.

/// One named unit of work mapped to a single external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    /// Shown in the per-step start banner.
    pub description: &'static str,
    /// Command dispatched through the execution environment.
    pub command: &'static str,
    /// Confirmation line printed after a zero exit.
    pub success_message: &'static str,
}

/// Project the gates run against; used in the startup banner.
pub const PROJECT_NAME: &str = "freshtrack-pro";

/// The four gates, in execution order.
pub fn quality_gates() -> [Step; 4] {
    [
        Step {
            name: "install",
            description: "Installing dependencies",
            command: "npm install",
            success_message: "Dependencies installed successfully",
        },
        Step {
            name: "build",
            description: "Running build process",
            command: "npm run build",
            success_message: "Build completed successfully",
        },
        Step {
            name: "test",
            description: "Running test suite",
            command: "npm test",
            success_message: "All tests passed",
        },
        Step {
            name: "lint",
            description: "Checking for linting issues",
            command: "npm run lint",
            success_message: "No linting issues found",
        },
    ]
}
