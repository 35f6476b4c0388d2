//! Problems found in a configuration.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// A reference in the configuration that cannot be traversed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitialState { initial: StateId },

    #[error("Event '{event}' in state '{state}' targets undeclared state '{target}'")]
    DanglingTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    #[error("Event '{event}' in state '{state}' has an empty target")]
    EmptyTarget { state: StateId, event: EventId },
}

/// When a machine checks its configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept any configuration; bad references fail on first traversal
    #[default]
    Lazy,

    /// Reject configurations with any violation at construction
    Eager,
}
