use crate::common::{ConsoleMessage, LoadStatus, PageError};
use crate::error::DriverError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

/// Handler invoked for every console message the page emits.
pub type ConsoleHandler = Box<dyn Fn(ConsoleMessage) + Send + Sync>;

/// Handler invoked for every runtime error surfaced from the page.
pub type ErrorHandler = Box<dyn Fn(PageError) + Send + Sync>;

/// One isolated browser page, bound to exactly one suite for its lifetime.
///
/// This trait is the narrow seam between the orchestration core and whatever
/// automation backend actually drives a browser. All code crosses the
/// boundary as source text; results come back as JSON values.
#[async_trait]
pub trait PageDriver: Send + Debug {
    /// Schedules `source` to run in the page before any of the page's own
    /// scripts, on every navigation. Used for polyfill installation.
    ///
    /// # Returns
    /// - `Ok(())` once the driver has accepted the script.
    /// - `Err(DriverError::Injection)` if the driver rejects it.
    async fn add_init_script(&mut self, source: &str) -> Result<(), DriverError>;

    /// Navigates the page to `url` and waits for the load-complete signal.
    ///
    /// There is no timeout at this layer; a stalled load blocks until the
    /// driver gives up on its own.
    async fn navigate(&mut self, url: &str) -> Result<LoadStatus, DriverError>;

    /// Injects `source` into the page's current scope and runs it.
    ///
    /// # Returns
    /// - `Ok(())` if the script was loaded and ran to completion.
    /// - `Err(DriverError::Injection)` if loading it failed.
    async fn inject(&mut self, source: &str) -> Result<(), DriverError>;

    /// Evaluates an expression in the page and returns its value as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` with the expression's result.
    /// - `Err(DriverError::ScriptThrew)` carrying the thrown message if the
    ///   evaluated code threw.
    async fn evaluate(&mut self, expression: &str) -> Result<Value, DriverError>;

    /// Registers the observer that receives forwarded console output.
    /// Replaces any previously registered handler.
    fn on_console(&mut self, handler: ConsoleHandler);

    /// Registers the observer that receives page runtime errors, as
    /// `(message, trace)` pairs. Replaces any previously registered handler.
    fn on_error(&mut self, handler: ErrorHandler);

    /// Closes the page. The driver must not deliver further events after
    /// this resolves.
    async fn close(&mut self) -> Result<(), DriverError>;
}

/// Capability to create isolated pages, one per suite.
#[async_trait]
pub trait DriverFactory: Send {
    async fn create_page(&mut self) -> Result<Box<dyn PageDriver>, DriverError>;
}
