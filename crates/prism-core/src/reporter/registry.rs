//! Static registry of reporter implementations, selected by name.
//!
//! A fixed table of known identifiers replaces any runtime class lookup:
//! unrecognized names produce [`SelectError::NotFound`] and nothing else.

use super::{CompactReporter, DefaultReporter, Reporter};
use std::sync::Arc;

/// Selector errors.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// No reporter implementation is registered under this name.
    #[error("unknown reporter: {name}")]
    NotFound { name: String },
}

type Constructor = fn(bool) -> Arc<dyn Reporter>;

fn default_reporter(colors: bool) -> Arc<dyn Reporter> {
    Arc::new(DefaultReporter::new(colors))
}

fn compact_reporter(colors: bool) -> Arc<dyn Reporter> {
    Arc::new(CompactReporter::new(colors))
}

const REPORTERS: &[(&str, Constructor)] = &[
    ("default", default_reporter),
    ("compact", compact_reporter),
];

/// Construct the reporter registered under `name`, configured with the color
/// flag. Allocation only: no output is written, no facade is touched.
pub fn resolve(name: &str, colors: bool) -> Result<Arc<dyn Reporter>, SelectError> {
    REPORTERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, construct)| construct(colors))
        .ok_or_else(|| SelectError::NotFound {
            name: name.to_string(),
        })
}

/// Names accepted by [`resolve`].
pub fn known_names() -> impl Iterator<Item = &'static str> {
    REPORTERS.iter().map(|(name, _)| *name)
}
