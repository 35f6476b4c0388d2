//! Point-in-time view of a machine's runtime state.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// The active state, visited path and cursor captured together.
///
/// Snapshots compare by value, which makes them handy for checking that a
/// failed operation left the machine untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The active state
    pub state: StateId,
    /// Every recorded state, including redoable ones
    pub path: Vec<StateId>,
    /// Position of `state` within `path`
    pub cursor: usize,
}
