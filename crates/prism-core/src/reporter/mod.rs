//! The pluggable consumer side of the relay.
//!
//! A reporter gets one method per event kind and renders human-readable
//! output; exactly one instance is active per process. Implementations own
//! their thread-safety (the router performs no synchronization) and must not
//! write anything at construction time.

mod compact;
mod default_reporter;
pub mod registry;

pub use compact::CompactReporter;
pub use default_reporter::DefaultReporter;

use crate::events::{
    ConsideredRisky, Errored, ExecutionFinished, ExecutionStarted, Failed, Finished,
    HookMethodErrored, MarkedIncomplete, Passed, PreparationStarted, Skipped, WarningTriggered,
};
use std::time::Duration;

/// Receives lifecycle events from the router. All methods default to no-ops
/// so a variant only implements the events it renders.
pub trait Reporter: std::fmt::Debug + Send + Sync {
    fn runner_execution_started(&self, _event: &ExecutionStarted) {}
    fn runner_execution_finished(&self, _event: &ExecutionFinished) {}
    fn runner_warning_triggered(&self, _event: &WarningTriggered) {}
    fn test_hook_method_errored(&self, _event: &HookMethodErrored) {}
    fn test_preparation_started(&self, _event: &PreparationStarted) {}
    fn test_finished(&self, _event: &Finished) {}
    fn test_considered_risky(&self, _event: &ConsideredRisky) {}
    fn test_errored(&self, _event: &Errored) {}
    fn test_failed(&self, _event: &Failed) {}
    fn test_marked_incomplete(&self, _event: &MarkedIncomplete) {}
    fn test_passed(&self, _event: &Passed) {}
    fn test_skipped(&self, _event: &Skipped) {}
}

/// Discards every event. Useful as a stand-in when output is unwanted.
impl Reporter for () {}

/// Outcome counts accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
    pub skipped: u32,
    pub incomplete: u32,
    pub risky: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.errored + self.skipped + self.incomplete + self.risky
    }
}

/// Format the end-of-run summary. Deterministic, unit-testable; zero
/// categories are omitted, failures lead.
pub(crate) fn format_summary_line(tally: &Tally, duration: Duration) -> String {
    if tally.total() == 0 {
        return format!("No tests executed ({:.2}s)", duration.as_secs_f64());
    }
    let mut parts = Vec::new();
    for (count, label) in [
        (tally.failed, "failed"),
        (tally.errored, "errored"),
        (tally.incomplete, "incomplete"),
        (tally.risky, "risky"),
        (tally.skipped, "skipped"),
        (tally.passed, "passed"),
    ] {
        if count > 0 {
            parts.push(format!("{} {}", count, label));
        }
    }
    format!(
        "Tests: {} ({:.2}s)",
        parts.join(", "),
        duration.as_secs_f64()
    )
}
