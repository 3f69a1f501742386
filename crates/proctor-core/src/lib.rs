//! # Proctor Core
//!
//! Ambient services shared by the orchestration crates: layered configuration
//! loading, the core error taxonomy, script-source resolution, terminal exit
//! codes, and an optional `env_logger` setup helper.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, RunnerConfig, ScriptSource, load_config};
pub use error::CoreError;

/// Terminal status: every suite passed.
pub const EXIT_OK: i32 = 0;

/// Terminal status: at least one suite had assertion failures.
pub const EXIT_SUITE_FAILED: i32 = 99;

/// Terminal status: `run_all` was invoked with an empty suite registry.
pub const EXIT_NO_SUITES: i32 = 98;
