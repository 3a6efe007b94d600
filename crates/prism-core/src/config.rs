//! Reporter selection settings.
//!
//! Sourcing these values (environment, config file, CLI) is the caller's
//! concern; the relay only consumes the resolved struct.

use serde::{Deserialize, Serialize};

/// Process-level reporter configuration.
///
/// A `None` reporter name disables the subsystem entirely; see
/// [`crate::Router::ensure_registered`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterSettings {
    /// Name of the reporter implementation to activate, e.g. `"default"`.
    pub reporter: Option<String>,
    /// Whether the reporter may emit ANSI color. Terminal capability
    /// detection happens upstream.
    pub colors: bool,
}
