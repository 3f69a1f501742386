use thiserror::Error;

/// Errors reported by a page-automation driver implementation.
///
/// These are intended to be driver-agnostic; a concrete implementation maps
/// its protocol-level failures onto these variants at the boundary.
#[derive(Error, Debug, Clone)]
pub enum DriverError {
    /// The driver could not create an isolated page.
    #[error("Page creation failed: {0}")]
    CreateFailed(String),

    /// Navigation could not be initiated or the load signal was lost.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// The driver rejected an injection request (script never reached the
    /// page's scope).
    #[error("Injection rejected: {0}")]
    Injection(String),

    /// Evaluated page code threw; carries the thrown error's message.
    #[error("Script threw: {0}")]
    ScriptThrew(String),

    /// Evaluation failed for a reason other than the script throwing
    /// (e.g. the result could not be serialized back).
    #[error("Evaluation failed: {0}")]
    Evaluate(String),

    /// The page was closed or detached while an operation was in flight.
    #[error("Page detached or closed")]
    Detached,

    /// An internal driver error. This may indicate a driver bug.
    #[error("Internal driver error: {0}")]
    Internal(String),
}
