//! End-to-end relay contract: every kind reaches exactly one reporter method
//! with the payload untouched, in delivery order, and registration happens
//! once per process.

use prism_core::events::{
    ConsideredRisky, Errored, Event, ExecutionFinished, ExecutionStarted, Failed, Finished,
    HookMethodErrored, MarkedIncomplete, Passed, PreparationStarted, Skipped, TestCase,
    WarningTriggered, EVENT_KINDS,
};
use prism_core::router::dispatch_bindings;
use prism_core::{Binding, EventKind, Reporter, ReporterSettings, Router, Subscriptions};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every call as the event it was handed. Because each trait method
/// wraps its payload back into the matching variant, an equality check
/// against the delivered event proves both the routing and the payload
/// identity.
#[derive(Debug, Default)]
struct RecordingReporter {
    calls: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    fn push(&self, event: Event) {
        self.calls.lock().unwrap().push(event);
    }

    fn calls(&self) -> Vec<Event> {
        self.calls.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn runner_execution_started(&self, event: &ExecutionStarted) {
        self.push(Event::RunnerExecutionStarted(event.clone()));
    }
    fn runner_execution_finished(&self, event: &ExecutionFinished) {
        self.push(Event::RunnerExecutionFinished(event.clone()));
    }
    fn runner_warning_triggered(&self, event: &WarningTriggered) {
        self.push(Event::RunnerWarningTriggered(event.clone()));
    }
    fn test_hook_method_errored(&self, event: &HookMethodErrored) {
        self.push(Event::TestHookMethodErrored(event.clone()));
    }
    fn test_preparation_started(&self, event: &PreparationStarted) {
        self.push(Event::TestPreparationStarted(event.clone()));
    }
    fn test_finished(&self, event: &Finished) {
        self.push(Event::TestFinished(event.clone()));
    }
    fn test_considered_risky(&self, event: &ConsideredRisky) {
        self.push(Event::TestConsideredRisky(event.clone()));
    }
    fn test_errored(&self, event: &Errored) {
        self.push(Event::TestErrored(event.clone()));
    }
    fn test_failed(&self, event: &Failed) {
        self.push(Event::TestFailed(event.clone()));
    }
    fn test_marked_incomplete(&self, event: &MarkedIncomplete) {
        self.push(Event::TestMarkedIncomplete(event.clone()));
    }
    fn test_passed(&self, event: &Passed) {
        self.push(Event::TestPassed(event.clone()));
    }
    fn test_skipped(&self, event: &Skipped) {
        self.push(Event::TestSkipped(event.clone()));
    }
}

#[derive(Default)]
struct FakeEngine {
    batches: Vec<Vec<Binding>>,
}

impl Subscriptions for FakeEngine {
    fn subscribe(&mut self, bindings: Vec<Binding>) {
        self.batches.push(bindings);
    }
}

fn test_case(id: &str) -> TestCase {
    TestCase {
        id: id.into(),
        name: format!("test_{}", id),
        file: Some("suite/calc_test.rs".into()),
    }
}

fn sample_events() -> Vec<Event> {
    vec![
        Event::RunnerExecutionStarted(ExecutionStarted { test_count: 4 }),
        Event::RunnerExecutionFinished(ExecutionFinished {
            duration: Duration::from_millis(420),
        }),
        Event::RunnerWarningTriggered(WarningTriggered {
            message: "no tests matched filter".into(),
        }),
        Event::TestHookMethodErrored(HookMethodErrored {
            test: test_case("T0"),
            hook_method: "set_up_before_class".into(),
            message: "fixture missing".into(),
        }),
        Event::TestPreparationStarted(PreparationStarted {
            test: test_case("T1"),
        }),
        Event::TestFinished(Finished {
            test: test_case("T1"),
            assertions: 3,
            duration: Duration::from_millis(12),
        }),
        Event::TestConsideredRisky(ConsideredRisky {
            test: test_case("T2"),
            message: "did not perform assertions".into(),
        }),
        Event::TestErrored(Errored {
            test: test_case("T3"),
            message: "connection refused".into(),
        }),
        Event::TestFailed(Failed {
            test: test_case("T4"),
            message: "assertion failed".into(),
            diff: Some("-expected\n+actual".into()),
        }),
        Event::TestMarkedIncomplete(MarkedIncomplete {
            test: test_case("T5"),
            message: "not implemented yet".into(),
        }),
        Event::TestPassed(Passed {
            test: test_case("T6"),
        }),
        Event::TestSkipped(Skipped {
            test: test_case("T7"),
            message: "requires network".into(),
        }),
    ]
}

#[test]
fn each_kind_relays_to_exactly_one_method() {
    let events = sample_events();
    assert_eq!(events.len(), EVENT_KINDS.len());

    for event in events {
        let reporter = Arc::new(RecordingReporter::default());
        let bindings = dispatch_bindings(reporter.clone());

        let binding = bindings
            .iter()
            .find(|b| b.kind() == event.kind())
            .expect("binding for every kind");
        binding.deliver(&event);

        // Exactly one call, on the matching method, with the identical
        // payload; no other method observed anything.
        assert_eq!(reporter.calls(), vec![event]);
    }
}

#[test]
fn delivery_order_is_preserved() {
    let reporter = Arc::new(RecordingReporter::default());
    let bindings = dispatch_bindings(reporter.clone());
    let deliver = |event: &Event| {
        bindings
            .iter()
            .find(|b| b.kind() == event.kind())
            .unwrap()
            .deliver(event);
    };

    let first = Event::TestPassed(Passed {
        test: test_case("T1"),
    });
    let second = Event::TestFailed(Failed {
        test: test_case("T2"),
        message: "nope".into(),
        diff: None,
    });
    deliver(&first);
    deliver(&second);

    assert_eq!(reporter.calls(), vec![first, second]);
}

#[test]
fn registration_scenario() {
    let router = Router::new();
    let mut engine = FakeEngine::default();
    let settings = ReporterSettings {
        reporter: Some("default".into()),
        colors: true,
    };

    router.ensure_registered(&settings, &mut engine);
    router.ensure_registered(&settings, &mut engine);

    assert_eq!(engine.batches.len(), 1);
    assert_eq!(engine.batches[0].len(), 12);
    let kinds: Vec<EventKind> = engine.batches[0].iter().map(Binding::kind).collect();
    assert_eq!(kinds, EVENT_KINDS.to_vec());
}

#[test]
#[serial]
fn global_router_is_process_wide() {
    let mut engine = FakeEngine::default();
    let settings = ReporterSettings {
        reporter: Some("compact".into()),
        colors: false,
    };

    Router::global().ensure_registered(&settings, &mut engine);
    assert!(Router::global().is_registered());
    let installed = engine.batches.len();
    assert!(installed <= 1);

    Router::global().ensure_registered(&settings, &mut engine);
    assert_eq!(engine.batches.len(), installed);
}
