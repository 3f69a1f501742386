//! Classification of runtime errors surfaced from a page.
//!
//! Pages produce plenty of noise (third-party scripts, benign races), so
//! most errors are filtered. The one message type that must never be dropped
//! is an assertion failure, recognized by the reserved marker substring.

use proctor_core::RunnerConfig;
use proctor_interfaces::{ASSERTION_MARKER, PageError, StackFrame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// An in-page assertion did not hold; payload is the message with the
    /// marker stripped. Always reported.
    AssertionFailure(String),
    /// Filtered out by debug mode or the ignore-list.
    Suppressed,
    /// A reportable page error; printed with its trace, never affects the
    /// suite outcome.
    Unexpected,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    debug: bool,
    ignore: Vec<String>,
}

impl ErrorClassifier {
    pub fn new(debug: bool, ignore: Vec<String>) -> Self {
        Self { debug, ignore }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.debug, config.ignore_errors.clone())
    }

    /// Classifies a page-error message. Priority order: marker check first
    /// (debug and ignore-list filtering do not apply to assertion failures),
    /// then debug-mode gating, then ignore-list containment.
    pub fn classify(&self, message: &str) -> Classification {
        if message.contains(ASSERTION_MARKER) {
            let stripped = message.replacen(ASSERTION_MARKER, "", 1).trim().to_string();
            return Classification::AssertionFailure(stripped);
        }
        if !self.debug {
            return Classification::Suppressed;
        }
        if self.ignore.iter().any(|entry| message.contains(entry.as_str())) {
            return Classification::Suppressed;
        }
        Classification::Unexpected
    }

    /// Routes one page error to the process output stream.
    pub fn report(&self, error: &PageError) {
        match self.classify(&error.message) {
            Classification::AssertionFailure(text) => println!("{text}"),
            Classification::Suppressed => {
                log::trace!("Suppressed page error: {}", error.message);
            }
            Classification::Unexpected => {
                println!("{}", error.message);
                for frame in &error.trace {
                    println!("  {}", render_frame(frame));
                }
            }
        }
    }
}

pub(crate) fn render_frame(frame: &StackFrame) -> String {
    match &frame.function {
        Some(name) => format!("{}: {} (in function {})", frame.location, frame.line, name),
        None => format!("{}: {}", frame.location, frame.line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_with_marker(text: &str) -> String {
        format!("{ASSERTION_MARKER} {text}")
    }

    #[test]
    fn marker_messages_always_classified_as_assertion_failures() {
        // Even with debug off and an ignore-list entry that matches.
        let classifier = ErrorClassifier::new(false, vec!["expected".to_string()]);
        let classification = classifier.classify(&message_with_marker("expected 3, got 4"));
        assert_eq!(
            classification,
            Classification::AssertionFailure("expected 3, got 4".to_string())
        );
    }

    #[test]
    fn marker_is_stripped_wherever_it_appears() {
        let classifier = ErrorClassifier::new(false, vec![]);
        let message = format!("Error: {ASSERTION_MARKER} list was empty");
        match classifier.classify(&message) {
            Classification::AssertionFailure(text) => {
                assert!(!text.contains(ASSERTION_MARKER));
                assert!(text.contains("list was empty"));
            }
            other => panic!("expected AssertionFailure, got {other:?}"),
        }
    }

    #[test]
    fn non_marker_errors_suppressed_when_debug_off() {
        let classifier = ErrorClassifier::new(false, vec![]);
        assert_eq!(
            classifier.classify("TypeError: undefined is not a function"),
            Classification::Suppressed
        );
    }

    #[test]
    fn ignore_list_is_a_containment_check() {
        let classifier = ErrorClassifier::new(true, vec!["adserver".to_string()]);
        assert_eq!(
            classifier.classify("Failed to load https://adserver.example/track.js"),
            Classification::Suppressed
        );
        assert_eq!(
            classifier.classify("ReferenceError: frobnicate is not defined"),
            Classification::Unexpected
        );
    }

    #[test]
    fn frame_rendering_includes_function_name_when_known() {
        let with_name = StackFrame {
            location: "http://example.test/app.js".to_string(),
            line: 42,
            function: Some("initWidgets".to_string()),
        };
        let without_name = StackFrame {
            location: "http://example.test/app.js".to_string(),
            line: 7,
            function: None,
        };
        assert_eq!(
            render_frame(&with_name),
            "http://example.test/app.js: 42 (in function initWidgets)"
        );
        assert_eq!(render_frame(&without_name), "http://example.test/app.js: 7");
    }
}
