use thiserror::Error;

// Re-export for convenience elsewhere
pub use config::ConfigError;

/// Errors raised while assembling a run's configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A configured polyfill, user-script, or assertion-library file could
    /// not be read from disk.
    #[error("Failed to read script '{path}': {reason}")]
    ScriptRead { path: String, reason: String },

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}
