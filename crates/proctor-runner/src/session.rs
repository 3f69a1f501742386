//! One page, one suite: the full open → inject → run → read-back lifecycle.

use crate::assertion;
use crate::classifier::ErrorClassifier;
use crate::error::RunError;
use crate::queue::TestQueue;
use crate::report;
use log::{debug, warn};
use proctor_core::{RunnerConfig, ScriptSource};
use proctor_interfaces::{LoadStatus, PageDriver};
use std::sync::Arc;

/// Prefix prepended to page console output when forwarding it, so page chatter
/// is distinguishable from the runner's own lines.
pub const CONSOLE_PREFIX: &str = "> ";

/// A suite's test-gathering function: receives the registration handle and
/// synchronously declares the suite's tests.
pub type GatherFn = Box<dyn FnOnce(&mut TestQueue) + Send>;

/// Owns one page driver for the duration of one suite. The page is never
/// reused; the session consumes itself and closes the page on the way out.
pub struct PageSession {
    driver: Box<dyn PageDriver>,
    config: Arc<RunnerConfig>,
    classifier: Arc<ErrorClassifier>,
}

impl PageSession {
    pub fn new(driver: Box<dyn PageDriver>, config: Arc<RunnerConfig>) -> Self {
        let classifier = Arc::new(ErrorClassifier::from_config(&config));
        Self {
            driver,
            config,
            classifier,
        }
    }

    /// Runs one suite to completion and returns its exit code.
    ///
    /// The page is closed before the result propagates, on the fatal-error
    /// path as much as on the success path, so no live page outlives its
    /// suite.
    pub async fn open_and_test(
        mut self,
        url: &str,
        gather: GatherFn,
        suite_id: usize,
        suite_count: usize,
    ) -> Result<i32, RunError> {
        let result = self.run_lifecycle(url, gather, suite_id, suite_count).await;

        // The page is done for either way; a failed close is not worth
        // aborting over.
        if let Err(e) = self.driver.close().await {
            warn!("Failed to close page for suite {}: {}", suite_id, e);
        }

        result
    }

    /// The lifecycle body. Step order is fixed: observers, polyfills
    /// (pre-navigation, so a broken polyfill aborts before the page ever
    /// loads), navigation, user scripts, assertion library, test gathering,
    /// queue drain, tally read. None of the steps may be skipped or
    /// reordered.
    async fn run_lifecycle(
        &mut self,
        url: &str,
        gather: GatherFn,
        suite_id: usize,
        suite_count: usize,
    ) -> Result<i32, RunError> {
        debug!("Opening page for suite {}: {}", suite_id, url);

        self.driver
            .on_console(Box::new(|msg| println!("{CONSOLE_PREFIX}{}", msg.text)));
        let classifier = Arc::clone(&self.classifier);
        self.driver
            .on_error(Box::new(move |err| classifier.report(&err)));

        let polyfills = self
            .config
            .polyfills
            .as_deref()
            .ok_or_else(|| RunError::Configuration("polyfills not configured".to_string()))?;
        for script in polyfills {
            debug!("Installing polyfill '{}'", script.name);
            self.driver
                .add_init_script(&script.source)
                .await
                .map_err(|e| injection_error("polyfill", script, e))?;
        }

        match self.driver.navigate(url).await {
            Ok(LoadStatus::Complete) => debug!("Page loaded: {}", url),
            Ok(LoadStatus::Failed) => {
                return Err(RunError::Navigation {
                    url: url.to_string(),
                    reason: "load did not complete".to_string(),
                });
            }
            Err(e) => {
                return Err(RunError::Navigation {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        let user_scripts = self
            .config
            .user_scripts
            .as_deref()
            .ok_or_else(|| RunError::Configuration("user scripts not configured".to_string()))?;
        for script in user_scripts {
            debug!("Injecting user script '{}'", script.name);
            self.driver
                .inject(&script.source)
                .await
                .map_err(|e| injection_error("user script", script, e))?;
        }

        let library = match &self.config.assertion_library {
            Some(source) => source.clone(),
            None => assertion::default_library(&self.config.tally_var),
        };
        self.driver
            .inject(&library)
            .await
            .map_err(|e| RunError::Injection {
                kind: "assertion library",
                name: self.config.tally_var.clone(),
                reason: e.to_string(),
            })?;

        let mut queue = TestQueue::new();
        gather(&mut queue);
        debug!("Suite {} declared {} test(s)", suite_id, queue.len());
        queue.drain(self.driver.as_mut()).await;

        report::finalize_suite(
            self.driver.as_mut(),
            &self.config.tally_var,
            suite_id,
            suite_count,
        )
        .await
    }
}

fn injection_error(
    kind: &'static str,
    script: &ScriptSource,
    err: proctor_interfaces::DriverError,
) -> RunError {
    RunError::Injection {
        kind,
        name: script.name.clone(),
        reason: err.to_string(),
    }
}
