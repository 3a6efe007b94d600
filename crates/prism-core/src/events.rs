//! Lifecycle events emitted by the test engine.
//!
//! The router treats every payload as opaque: fields are carried through to
//! the active reporter untouched. Payload shapes mirror what the engine
//! records per event (test descriptor, messages, timing, assertion counts).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The closed set of lifecycle event kinds the relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    RunnerExecutionStarted,
    RunnerExecutionFinished,
    RunnerWarningTriggered,
    TestHookMethodErrored,
    TestPreparationStarted,
    TestFinished,
    TestConsideredRisky,
    TestErrored,
    TestFailed,
    TestMarkedIncomplete,
    TestPassed,
    TestSkipped,
}

/// Every kind, in the order bindings are installed.
pub const EVENT_KINDS: [EventKind; 12] = [
    EventKind::RunnerExecutionStarted,
    EventKind::RunnerExecutionFinished,
    EventKind::RunnerWarningTriggered,
    EventKind::TestHookMethodErrored,
    EventKind::TestPreparationStarted,
    EventKind::TestFinished,
    EventKind::TestConsideredRisky,
    EventKind::TestErrored,
    EventKind::TestFailed,
    EventKind::TestMarkedIncomplete,
    EventKind::TestPassed,
    EventKind::TestSkipped,
];

/// Identifies one test within the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub file: Option<String>,
}

/// The runner started executing the suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStarted {
    pub test_count: usize,
}

/// The runner finished executing the suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionFinished {
    pub duration: Duration,
}

/// The runner raised a warning not tied to a single test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningTriggered {
    pub message: String,
}

/// A before/after hook method errored before the test body ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookMethodErrored {
    pub test: TestCase,
    pub hook_method: String,
    pub message: String,
}

/// A test is about to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationStarted {
    pub test: TestCase,
}

/// A test finished, regardless of outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finished {
    pub test: TestCase,
    pub assertions: u64,
    pub duration: Duration,
}

/// A test ran but was flagged as risky by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsideredRisky {
    pub test: TestCase,
    pub message: String,
}

/// A test aborted with an unexpected error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errored {
    pub test: TestCase,
    pub message: String,
}

/// A test assertion failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failed {
    pub test: TestCase,
    pub message: String,
    /// Expected/actual comparison, when the engine produced one.
    pub diff: Option<String>,
}

/// A test declared itself incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedIncomplete {
    pub test: TestCase,
    pub message: String,
}

/// A test passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passed {
    pub test: TestCase,
}

/// A test was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    pub test: TestCase,
    pub message: String,
}

/// One lifecycle event with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    RunnerExecutionStarted(ExecutionStarted),
    RunnerExecutionFinished(ExecutionFinished),
    RunnerWarningTriggered(WarningTriggered),
    TestHookMethodErrored(HookMethodErrored),
    TestPreparationStarted(PreparationStarted),
    TestFinished(Finished),
    TestConsideredRisky(ConsideredRisky),
    TestErrored(Errored),
    TestFailed(Failed),
    TestMarkedIncomplete(MarkedIncomplete),
    TestPassed(Passed),
    TestSkipped(Skipped),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::RunnerExecutionStarted(_) => EventKind::RunnerExecutionStarted,
            Event::RunnerExecutionFinished(_) => EventKind::RunnerExecutionFinished,
            Event::RunnerWarningTriggered(_) => EventKind::RunnerWarningTriggered,
            Event::TestHookMethodErrored(_) => EventKind::TestHookMethodErrored,
            Event::TestPreparationStarted(_) => EventKind::TestPreparationStarted,
            Event::TestFinished(_) => EventKind::TestFinished,
            Event::TestConsideredRisky(_) => EventKind::TestConsideredRisky,
            Event::TestErrored(_) => EventKind::TestErrored,
            Event::TestFailed(_) => EventKind::TestFailed,
            Event::TestMarkedIncomplete(_) => EventKind::TestMarkedIncomplete,
            Event::TestPassed(_) => EventKind::TestPassed,
            Event::TestSkipped(_) => EventKind::TestSkipped,
        }
    }
}
