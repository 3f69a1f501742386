use proctor_interfaces::DriverError;
use thiserror::Error;

/// Errors that abort a run.
///
/// Assertion failures never appear here; they flow through the per-page
/// tally and surface as a non-zero suite exit code. Unexpected page errors
/// are print-only and never abort anything.
#[derive(Error, Debug)]
pub enum RunError {
    /// A required piece of configuration was missing, or the orchestrator
    /// was used out of order.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A polyfill, user script, or assertion library failed to load into the
    /// page. A suite with missing setup code cannot produce meaningful
    /// results, so this aborts the whole run.
    #[error("Failed to inject {kind} '{name}': {reason}")]
    Injection {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Navigation to '{url}' failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// The assertion tally could not be read back from the page after the
    /// suite's tests ran.
    #[error("Assertion tally unreadable: {0}")]
    Tally(String),
}
