//! Event relay between a test-execution engine and a pluggable console
//! reporter.
//!
//! The engine calls [`Router::ensure_registered`] during its startup phase.
//! If a reporter is configured, the router resolves it by name, builds one
//! binding per lifecycle event kind, and hands the batch to the engine's
//! subscription facade. From then on the engine invokes the bindings as
//! events occur and each one forwards its payload, untouched, to the
//! matching reporter method.
//!
//! Registration happens at most once per process, and reporter setup never
//! fails the run: a missing or unknown reporter name silently disables
//! reporting instead.
//!
//! ```
//! use prism_core::{Binding, ReporterSettings, Router, Subscriptions};
//!
//! struct Engine {
//!     bindings: Vec<Binding>,
//! }
//!
//! impl Subscriptions for Engine {
//!     fn subscribe(&mut self, bindings: Vec<Binding>) {
//!         self.bindings.extend(bindings);
//!     }
//! }
//!
//! let mut engine = Engine { bindings: Vec::new() };
//! let settings = ReporterSettings {
//!     reporter: Some("compact".into()),
//!     colors: false,
//! };
//! Router::new().ensure_registered(&settings, &mut engine);
//! assert_eq!(engine.bindings.len(), 12);
//! ```

pub mod config;
pub mod events;
pub mod facade;
pub mod reporter;
pub mod router;

pub use config::ReporterSettings;
pub use events::{Event, EventKind};
pub use facade::{Binding, Subscriptions};
pub use reporter::registry::SelectError;
pub use reporter::Reporter;
pub use router::Router;
