//! FIFO collection and execution of a suite's declared tests.

use log::debug;
use proctor_interfaces::{ASSERTION_MARKER, DriverError, PageDriver};
use std::collections::VecDeque;

/// One declared test: a name and the page-side code that runs it.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub body: String,
}

/// The handle a suite's gathering function receives. Tests run in the exact
/// order they were registered; the set is fixed once gathering returns.
#[derive(Debug, Default)]
pub struct TestQueue {
    entries: VecDeque<TestCase>,
}

impl TestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a test to the queue.
    pub fn register(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.entries.push_back(TestCase {
            name: name.into(),
            body: body.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.entries.iter()
    }

    /// Runs every queued test in the page, head first. Taking the queue by
    /// value makes a second drain unrepresentable.
    ///
    /// Each body runs behind a failure barrier: an error thrown inside one
    /// test is caught, printed with a FAIL marker, and never stops the tests
    /// behind it.
    pub(crate) async fn drain(mut self, driver: &mut dyn PageDriver) {
        while let Some(test) = self.entries.pop_front() {
            debug!("Running test '{}'", test.name);
            match driver.evaluate(&test.body).await {
                Ok(_) => println!("[OK] {}", test.name),
                Err(err) => println!("[FAIL] {}: {}", test.name, failure_reason(&err)),
            }
        }
    }
}

fn failure_reason(err: &DriverError) -> String {
    match err {
        // The thrown message itself; drop the marker, it is plumbing.
        DriverError::ScriptThrew(msg) => msg.replacen(ASSERTION_MARKER, "", 1).trim().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_declaration_order() {
        let mut queue = TestQueue::new();
        queue.register("first", "check(1)");
        queue.register("second", "check(2)");
        queue.register("third", "check(3)");

        let names: Vec<_> = queue.cases().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn failure_reason_strips_the_marker() {
        let err = DriverError::ScriptThrew(format!("{ASSERTION_MARKER} expected true"));
        assert_eq!(failure_reason(&err), "expected true");

        let err = DriverError::Detached;
        assert_eq!(failure_reason(&err), "Page detached or closed");
    }
}
