//! # Proctor Runner
//!
//! The suite-orchestration core: registers ordered test suites, drives each
//! one through a fresh page (navigate, inject polyfills and user scripts,
//! install an assertion library, run the declared tests), and folds the
//! per-suite results into a final run status.
//!
//! The core never talks to a browser directly; it drives the `PageDriver`
//! and `DriverFactory` traits from `proctor-interfaces`. Execution is
//! strictly sequential: exactly one page is alive at a time, and suite *n+1*
//! never starts before suite *n* has fully finished.

// Re-export the L1 contract for user convenience
pub use proctor_interfaces::{
    ASSERTION_MARKER, ConsoleHandler, ConsoleMessage, DriverError, DriverFactory, ErrorHandler,
    LoadStatus, PageDriver, PageError, StackFrame, Tally,
};

// Re-export core types needed to configure a run
pub use proctor_core::config::DEFAULT_TALLY_VAR;
pub use proctor_core::{
    Config, CoreError, EXIT_NO_SUITES, EXIT_OK, EXIT_SUITE_FAILED, RunnerConfig, ScriptSource,
    load_config,
};

mod assertion;
mod classifier;
mod error;
mod orchestrator;
mod queue;
mod report;
mod session;

pub use assertion::default_library;
pub use classifier::{Classification, ErrorClassifier};
pub use error::RunError;
pub use orchestrator::{FinalStatus, Orchestrator};
pub use queue::{TestCase, TestQueue};
pub use session::{CONSOLE_PREFIX, GatherFn, PageSession};
