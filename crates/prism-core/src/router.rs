//! Event router: installs the reporter bindings on the host facade, once.
//!
//! The router is a transparent relay. It never inspects payloads, never
//! reorders or coalesces events, and performs no synchronization beyond the
//! one-shot registration flag. Reporter setup can only disable itself, never
//! fail the surrounding test run.

use crate::config::ReporterSettings;
use crate::events::{Event, EventKind};
use crate::facade::{Binding, Subscriptions};
use crate::reporter::{registry, Reporter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owns the process-lifetime registration state. There is no unregister
/// operation and no reset.
pub struct Router {
    registered: AtomicBool,
}

impl Router {
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    /// The process-wide router the host engine registers through.
    pub fn global() -> &'static Router {
        static GLOBAL: Router = Router::new();
        &GLOBAL
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Idempotent registration entry point. Called by the host during its
    /// startup phase, before any lifecycle event is emitted.
    ///
    /// Silent no-op when no reporter is configured, when registration already
    /// happened, or when the configured name is unknown. None of these
    /// surface to the caller.
    pub fn ensure_registered(&self, settings: &ReporterSettings, facade: &mut dyn Subscriptions) {
        let Some(name) = settings.reporter.as_deref() else {
            tracing::debug!("no reporter configured, reporting disabled");
            return;
        };

        // Flag flips before any registration work so a re-entrant or
        // concurrent call during setup cannot register twice.
        if self
            .registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("reporter already registered");
            return;
        }

        let reporter = match registry::resolve(name, settings.colors) {
            Ok(reporter) => reporter,
            Err(_) => {
                tracing::debug!(reporter = name, "unknown reporter, reporting disabled");
                return;
            }
        };

        facade.subscribe(dispatch_bindings(reporter));
        tracing::debug!(reporter = name, "console reporter registered");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn bind(kind: EventKind, reporter: &Arc<dyn Reporter>, call: fn(&dyn Reporter, &Event)) -> Binding {
    let reporter = Arc::clone(reporter);
    Binding::new(kind, move |event| call(reporter.as_ref(), event))
}

/// Build the twelve bindings, all closing over the same reporter instance.
/// Each handler makes exactly one call to the method matching its kind and
/// hands the payload through untouched.
pub fn dispatch_bindings(reporter: Arc<dyn Reporter>) -> Vec<Binding> {
    vec![
        bind(EventKind::RunnerExecutionStarted, &reporter, |r, e| {
            if let Event::RunnerExecutionStarted(p) = e {
                r.runner_execution_started(p);
            }
        }),
        bind(EventKind::RunnerExecutionFinished, &reporter, |r, e| {
            if let Event::RunnerExecutionFinished(p) = e {
                r.runner_execution_finished(p);
            }
        }),
        bind(EventKind::RunnerWarningTriggered, &reporter, |r, e| {
            if let Event::RunnerWarningTriggered(p) = e {
                r.runner_warning_triggered(p);
            }
        }),
        bind(EventKind::TestHookMethodErrored, &reporter, |r, e| {
            if let Event::TestHookMethodErrored(p) = e {
                r.test_hook_method_errored(p);
            }
        }),
        bind(EventKind::TestPreparationStarted, &reporter, |r, e| {
            if let Event::TestPreparationStarted(p) = e {
                r.test_preparation_started(p);
            }
        }),
        bind(EventKind::TestFinished, &reporter, |r, e| {
            if let Event::TestFinished(p) = e {
                r.test_finished(p);
            }
        }),
        bind(EventKind::TestConsideredRisky, &reporter, |r, e| {
            if let Event::TestConsideredRisky(p) = e {
                r.test_considered_risky(p);
            }
        }),
        bind(EventKind::TestErrored, &reporter, |r, e| {
            if let Event::TestErrored(p) = e {
                r.test_errored(p);
            }
        }),
        bind(EventKind::TestFailed, &reporter, |r, e| {
            if let Event::TestFailed(p) = e {
                r.test_failed(p);
            }
        }),
        bind(EventKind::TestMarkedIncomplete, &reporter, |r, e| {
            if let Event::TestMarkedIncomplete(p) = e {
                r.test_marked_incomplete(p);
            }
        }),
        bind(EventKind::TestPassed, &reporter, |r, e| {
            if let Event::TestPassed(p) = e {
                r.test_passed(p);
            }
        }),
        bind(EventKind::TestSkipped, &reporter, |r, e| {
            if let Event::TestSkipped(p) = e {
                r.test_skipped(p);
            }
        }),
    ]
}
