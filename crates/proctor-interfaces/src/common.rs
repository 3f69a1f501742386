use serde::Deserialize;

/// Reserved, versioned marker prefix carried by the message of every error an
/// in-page assertion library throws to signal a failed assertion.
///
/// The page boundary only carries error-typed messages, so this substring is
/// the out-of-band channel by which an assertion failure becomes visible to
/// the orchestrating process. Messages containing it are always reported,
/// regardless of debug or ignore-list settings.
pub const ASSERTION_MARKER: &str = "[proctor:assert:v1]";

/// A console message emitted by page-side code and forwarded by the driver.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub text: String,
}

/// One frame of a page-side error trace.
#[derive(Debug, Clone)]
pub struct StackFrame {
    /// Source location, typically a URL or file path.
    pub location: String,
    pub line: u64,
    /// Name of the enclosing function, when the driver knows it.
    pub function: Option<String>,
}

/// A runtime error surfaced from inside a page, with whatever trace the
/// driver could recover.
#[derive(Debug, Clone)]
pub struct PageError {
    pub message: String,
    pub trace: Vec<StackFrame>,
}

/// Outcome of a navigation, reported once the load-complete signal fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Complete,
    Failed,
}

/// The per-page assertion counters, read back from the configured tally
/// global once a suite's test queue has drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Tally {
    pub good: u64,
    pub bad: u64,
}
