//! The built-in in-page assertion library.
//!
//! A caller may substitute their own implementation via
//! `RunnerConfig::assertion_library`; whatever is installed must publish a
//! `{ good, bad }` tally under the configured global name and mark thrown
//! assertion failures with [`ASSERTION_MARKER`].

use proctor_interfaces::ASSERTION_MARKER;

/// Source of the default assertion library, parameterized with the global
/// variable name the tally is published under.
///
/// `assert(condition, message)` increments `good` and returns on success;
/// on failure it increments `bad` and throws an error whose message carries
/// the reserved marker, so the failure stays visible to the orchestrating
/// process even when it escapes the page.
pub fn default_library(tally_var: &str) -> String {
    format!(
        r#"window.{tally_var} = {{ good: 0, bad: 0 }};
window.assert = function (condition, message) {{
    if (condition) {{
        window.{tally_var}.good += 1;
        return;
    }}
    window.{tally_var}.bad += 1;
    throw new Error("{ASSERTION_MARKER} " + (message || "assertion did not hold"));
}};
"#
    )
}
