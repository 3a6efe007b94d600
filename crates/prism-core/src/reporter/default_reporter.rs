//! Default reporter: one line per test outcome, summary at run finish.

use super::{format_summary_line, Reporter, Tally};
use crate::events::{
    ConsideredRisky, Errored, ExecutionFinished, ExecutionStarted, Failed, HookMethodErrored,
    MarkedIncomplete, Passed, Skipped, TestCase, WarningTriggered,
};
use colored::{Color, Colorize};
use std::sync::Mutex;

#[derive(Debug)]
pub struct DefaultReporter {
    colors: bool,
    tally: Mutex<Tally>,
}

impl DefaultReporter {
    pub fn new(colors: bool) -> Self {
        Self {
            colors,
            tally: Mutex::new(Tally::default()),
        }
    }

    fn label(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn record(&self, update: impl FnOnce(&mut Tally)) {
        let mut tally = self.tally.lock().expect("reporter tally lock");
        update(&mut tally);
    }
}

/// Format one outcome line. Deterministic, unit-testable; the colored label
/// is prepended by the caller.
pub(crate) fn format_outcome_line(label: &str, test: &TestCase, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{} {} - {}", label, test.name, message),
        None => format!("{} {}", label, test.name),
    }
}

impl Reporter for DefaultReporter {
    fn runner_execution_started(&self, event: &ExecutionStarted) {
        eprintln!("Running {} tests", event.test_count);
    }

    fn runner_execution_finished(&self, event: &ExecutionFinished) {
        let tally = self.tally.lock().expect("reporter tally lock");
        eprintln!("{}", format_summary_line(&tally, event.duration));
    }

    fn runner_warning_triggered(&self, event: &WarningTriggered) {
        eprintln!("{} {}", self.label("WARN", Color::Yellow), event.message);
    }

    fn test_hook_method_errored(&self, event: &HookMethodErrored) {
        eprintln!(
            "{} {}::{} - {}",
            self.label("HOOK ERROR", Color::Red),
            event.test.name,
            event.hook_method,
            event.message
        );
    }

    fn test_considered_risky(&self, event: &ConsideredRisky) {
        self.record(|t| t.risky += 1);
        eprintln!(
            "{}",
            format_outcome_line(
                &self.label("RISKY", Color::Magenta),
                &event.test,
                Some(&event.message)
            )
        );
    }

    fn test_errored(&self, event: &Errored) {
        self.record(|t| t.errored += 1);
        eprintln!(
            "{}",
            format_outcome_line(
                &self.label("ERROR", Color::Red),
                &event.test,
                Some(&event.message)
            )
        );
    }

    fn test_failed(&self, event: &Failed) {
        self.record(|t| t.failed += 1);
        eprintln!(
            "{}",
            format_outcome_line(
                &self.label("FAIL", Color::Red),
                &event.test,
                Some(&event.message)
            )
        );
        if let Some(diff) = &event.diff {
            for line in diff.lines() {
                eprintln!("  {}", line);
            }
        }
    }

    fn test_marked_incomplete(&self, event: &MarkedIncomplete) {
        self.record(|t| t.incomplete += 1);
        eprintln!(
            "{}",
            format_outcome_line(
                &self.label("INCOMPLETE", Color::Cyan),
                &event.test,
                Some(&event.message)
            )
        );
    }

    fn test_passed(&self, event: &Passed) {
        self.record(|t| t.passed += 1);
        eprintln!(
            "{}",
            format_outcome_line(&self.label("PASS", Color::Green), &event.test, None)
        );
    }

    fn test_skipped(&self, event: &Skipped) {
        self.record(|t| t.skipped += 1);
        eprintln!(
            "{}",
            format_outcome_line(
                &self.label("SKIP", Color::Yellow),
                &event.test,
                Some(&event.message)
            )
        );
    }
}
