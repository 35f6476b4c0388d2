//! Errors reported by state machine operations.

use crate::core::{EventId, StateId};
use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
///
/// A failed operation never changes the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("config not provided")]
    MissingConfig,

    #[error("State '{state}' does not exist")]
    UnknownState { state: StateId },

    #[error("Event '{event}' is not defined in state '{state}'")]
    UnknownTransition { state: StateId, event: EventId },

    #[error("Configuration rejected with {} violation(s)", violations.len())]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}
