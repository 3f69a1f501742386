//! Per-suite result aggregation: one tally read, one summary line, one exit
//! code.

use crate::error::RunError;
use log::debug;
use proctor_core::{EXIT_OK, EXIT_SUITE_FAILED};
use proctor_interfaces::{PageDriver, Tally};

/// Reads the assertion tally from the page exactly once, prints the suite
/// summary, and maps the tally to a suite exit code.
///
/// The tally is assumed stable here: the test queue has fully drained, and
/// nothing else runs in the page before the next suite's page replaces it.
pub async fn finalize_suite(
    driver: &mut dyn PageDriver,
    tally_var: &str,
    suite_id: usize,
    suite_count: usize,
) -> Result<i32, RunError> {
    let value = driver
        .evaluate(&format!("window.{tally_var}"))
        .await
        .map_err(|e| RunError::Tally(e.to_string()))?;
    let tally: Tally = serde_json::from_value(value).map_err(|e| RunError::Tally(e.to_string()))?;
    debug!("Suite {} tally: {:?}", suite_id, tally);

    println!("{}", render_summary(suite_id, suite_count, &tally));
    Ok(exit_code(&tally))
}

pub(crate) fn exit_code(tally: &Tally) -> i32 {
    if tally.bad > 0 { EXIT_SUITE_FAILED } else { EXIT_OK }
}

pub(crate) fn render_summary(suite_id: usize, suite_count: usize, tally: &Tally) -> String {
    let mut line = format!(
        "Suite {}/{} finished: {} OK",
        suite_id + 1,
        suite_count,
        tally.good
    );
    if tally.bad > 0 {
        line.push_str(&format!(", {} KO", tally.bad));
    }
    line
}
