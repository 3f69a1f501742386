//! The ordered suite registry and the sequential run loop.

use crate::error::RunError;
use crate::queue::TestQueue;
use crate::session::{GatherFn, PageSession};
use log::{debug, info};
use proctor_core::{EXIT_NO_SUITES, EXIT_OK, EXIT_SUITE_FAILED, RunnerConfig};
use proctor_interfaces::DriverFactory;
use std::sync::Arc;

struct Suite {
    url: String,
    gather: GatherFn,
}

/// Per-suite exit codes, appended in completion order, read once at the end.
#[derive(Debug, Default)]
struct RunState {
    codes: Vec<i32>,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalStatus {
    Passed,
    Failed,
    /// `run_all` was called with nothing registered.
    NoSuites,
}

impl FinalStatus {
    /// The process exit status this outcome maps to.
    pub fn exit_code(self) -> i32 {
        match self {
            FinalStatus::Passed => EXIT_OK,
            FinalStatus::Failed => EXIT_SUITE_FAILED,
            FinalStatus::NoSuites => EXIT_NO_SUITES,
        }
    }
}

/// Owns the suite registry and the run state; drives suites strictly in
/// registration order, one page alive at a time.
pub struct Orchestrator<F: DriverFactory> {
    factory: F,
    config: Arc<RunnerConfig>,
    suites: Vec<Suite>,
    started: bool,
}

impl<F: DriverFactory> Orchestrator<F> {
    pub fn new(factory: F, config: RunnerConfig) -> Self {
        Self {
            factory,
            config: Arc::new(config),
            suites: Vec::new(),
            started: false,
        }
    }

    /// Appends a suite to the registry. Registration order is execution
    /// order; the registry is frozen once `run_all` starts.
    pub fn register_suite(
        &mut self,
        url: impl Into<String>,
        gather: impl FnOnce(&mut TestQueue) + Send + 'static,
    ) -> Result<(), RunError> {
        if self.started {
            return Err(RunError::Configuration(
                "suite registered after run started".to_string(),
            ));
        }
        self.suites.push(Suite {
            url: url.into(),
            gather: Box::new(gather),
        });
        Ok(())
    }

    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Runs every registered suite in order and folds their exit codes into
    /// a final status.
    ///
    /// Suite *n+1*'s page is not constructed until suite *n* has fully
    /// finished (tally read included). Fatal errors (configuration,
    /// injection, navigation) abort immediately; remaining suites do not run.
    pub async fn run_all(&mut self) -> Result<FinalStatus, RunError> {
        if self.started {
            return Err(RunError::Configuration("run already started".to_string()));
        }
        self.started = true;

        let suites = std::mem::take(&mut self.suites);
        if suites.is_empty() {
            println!("No suites registered");
            return Ok(FinalStatus::NoSuites);
        }

        let suite_count = suites.len();
        let mut run_state = RunState::default();
        for (suite_id, suite) in suites.into_iter().enumerate() {
            info!("Starting suite {}/{}: {}", suite_id + 1, suite_count, suite.url);
            let driver = self.factory.create_page().await?;
            let session = PageSession::new(driver, Arc::clone(&self.config));
            let code = session
                .open_and_test(&suite.url, suite.gather, suite_id, suite_count)
                .await?;
            debug!("Suite {}/{} exit code: {}", suite_id + 1, suite_count, code);
            run_state.codes.push(code);
        }

        let failed = run_state
            .codes
            .iter()
            .filter(|code| **code == EXIT_SUITE_FAILED)
            .count();
        println!("{} suite(s) run, {} failed", suite_count, failed);

        Ok(if failed > 0 {
            FinalStatus::Failed
        } else {
            FinalStatus::Passed
        })
    }
}
