//! Compact reporter: one progress character per outcome, summary at the end.

use super::{format_summary_line, Reporter, Tally};
use crate::events::{
    ConsideredRisky, Errored, ExecutionFinished, Failed, MarkedIncomplete, Passed, Skipped,
};
use colored::Colorize;
use std::io::Write;
use std::sync::Mutex;

/// Character printed for each outcome class.
pub(crate) fn progress_char(outcome: Outcome) -> char {
    match outcome {
        Outcome::Passed => '.',
        Outcome::Failed => 'F',
        Outcome::Errored => 'E',
        Outcome::Skipped => 'S',
        Outcome::Incomplete => 'I',
        Outcome::Risky => 'R',
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Passed,
    Failed,
    Errored,
    Skipped,
    Incomplete,
    Risky,
}

#[derive(Debug)]
pub struct CompactReporter {
    colors: bool,
    tally: Mutex<Tally>,
}

impl CompactReporter {
    pub fn new(colors: bool) -> Self {
        Self {
            colors,
            tally: Mutex::new(Tally::default()),
        }
    }

    fn emit(&self, outcome: Outcome) {
        {
            let mut tally = self.tally.lock().expect("reporter tally lock");
            match outcome {
                Outcome::Passed => tally.passed += 1,
                Outcome::Failed => tally.failed += 1,
                Outcome::Errored => tally.errored += 1,
                Outcome::Skipped => tally.skipped += 1,
                Outcome::Incomplete => tally.incomplete += 1,
                Outcome::Risky => tally.risky += 1,
            }
        }
        let c = progress_char(outcome);
        let rendered = if self.colors && matches!(outcome, Outcome::Failed | Outcome::Errored) {
            c.to_string().red().bold().to_string()
        } else {
            c.to_string()
        };
        eprint!("{}", rendered);
        let _ = std::io::stderr().flush();
    }
}

impl Reporter for CompactReporter {
    fn runner_execution_finished(&self, event: &ExecutionFinished) {
        let tally = self.tally.lock().expect("reporter tally lock");
        eprintln!();
        eprintln!("{}", format_summary_line(&tally, event.duration));
    }

    fn test_considered_risky(&self, _event: &ConsideredRisky) {
        self.emit(Outcome::Risky);
    }

    fn test_errored(&self, _event: &Errored) {
        self.emit(Outcome::Errored);
    }

    fn test_failed(&self, _event: &Failed) {
        self.emit(Outcome::Failed);
    }

    fn test_marked_incomplete(&self, _event: &MarkedIncomplete) {
        self.emit(Outcome::Incomplete);
    }

    fn test_passed(&self, _event: &Passed) {
        self.emit(Outcome::Passed);
    }

    fn test_skipped(&self, _event: &Skipped) {
        self.emit(Outcome::Skipped);
    }
}
