//! # Proctor Interfaces (L1 - Public API Contract)
//!
//! This crate defines the boundary between the suite-orchestration core and
//! the page-automation driver. It provides driver-agnostic traits
//! (`PageDriver`, `DriverFactory`), the `DriverError` type, and the common
//! data structures (console messages, page errors, stack frames) exchanged
//! across that boundary. The core depends only on these traits, never on a
//! concrete browser.

mod common;
mod driver;
mod error;

pub use common::*;
pub use driver::*;
pub use error::*;
