//! Point-in-time view of a machine for diagnostics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializable view of a machine's current position.
///
/// Carries names rather than identifiers, so it can be logged or exported
/// without the identifier type being serializable. It cannot be used to
/// rebuild a machine: hooks are not part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Name of the current state
    pub current_state: String,

    /// Names of all registered states, sorted
    pub registered_states: Vec<String>,

    /// Whether transitions to unregistered targets are rejected
    pub strict: bool,

    /// Dwell time of the current state in milliseconds, if it was entered
    /// through a transition
    pub time_in_state_ms: Option<u64>,
}
