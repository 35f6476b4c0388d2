//! State machine driven by a shared transition table.
//!
//! [`StateMachine`] tracks the active state of a flat machine, checks moves
//! against its [`Config`], and keeps a linear history for undo/redo.
//!
//! - `change_state`, `trigger` and `reset` write to the history, discarding
//!   any redoable entries after the cursor
//! - `undo` and `redo` move the cursor without touching the history
//! - `clear_history` collapses the history to the initial state
//!
//! Every failing operation leaves the machine exactly as it was.

mod error;
mod snapshot;

pub use error::FsmError;
pub use snapshot::Snapshot;

use crate::builder::StateMachineBuilder;
use crate::core::{Config, EventId, History, StateId};
use std::sync::Arc;

/// Flat finite state machine with undo/redo history.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Config, StateDefinition};
/// use waypoint::StateMachine;
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDefinition::new().on("start", "running")),
///         ("running", StateDefinition::new().on("stop", "stopped")),
///         ("stopped", StateDefinition::new()),
///     ],
/// );
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start").unwrap();
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.state(), "stopped");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Config>,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at the configured initial state.
    ///
    /// The initial state is not checked against the declared states.
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        let config = config.into();
        let history = History::new(config.initial().clone());
        Self { config, history }
    }

    /// Start a builder, for optional configuration or eager validation.
    pub fn builder() -> StateMachineBuilder {
        StateMachineBuilder::new()
    }

    /// The active state.
    pub fn state(&self) -> &StateId {
        &self.history.current().state
    }

    /// The configured initial state.
    pub fn initial(&self) -> &StateId {
        self.config.initial()
    }

    /// The shared transition table.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move to `target` regardless of the transition rules.
    ///
    /// Fails with [`FsmError::UnknownState`] if `target` is not declared.
    /// Any redoable history is discarded.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains(target) {
            return Err(FsmError::UnknownState {
                state: target.into(),
            });
        }

        let from = self.state().clone();
        self.history.push(target.into());
        tracing::debug!(
            from = %from,
            to = %target,
            cursor = self.history.cursor(),
            "state changed"
        );
        Ok(())
    }

    /// Fire `event` from the active state.
    ///
    /// Fails with [`FsmError::UnknownTransition`] if the active state does
    /// not accept `event`, or [`FsmError::UnknownState`] if the configured
    /// target is not declared.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let state = self.state();
        let Some(target) = self.config.target(state, event) else {
            return Err(FsmError::UnknownTransition {
                state: state.clone(),
                event: event.into(),
            });
        };

        tracing::trace!(event = %event, to = %target, "transition resolved");
        let target = target.clone();
        self.change_state(&target)
    }

    /// Move back to the initial state as a new, undoable history entry.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let initial = self.config.initial().clone();
        self.change_state(&initial)
    }

    /// Declared states, optionally only those accepting `event`.
    ///
    /// Results follow declaration order. `Some("")` looks up the event named
    /// `""` like any other; pass `None` to list every state.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            Some(event) => self.config.states_with_event(event).collect(),
            None => self.config.state_ids().collect(),
        }
    }

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            tracing::trace!("nothing to undo");
            return false;
        }
        tracing::debug!(to = %self.state(), cursor = self.history.cursor(), "undo");
        true
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            tracing::trace!("nothing to redo");
            return false;
        }
        tracing::debug!(to = %self.state(), cursor = self.history.cursor(), "redo");
        true
    }

    /// Drop the whole history and return to the initial state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::debug!(state = %self.state(), "history cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether the active state has a transition for `event`.
    ///
    /// The target itself is not checked.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(self.state(), event).is_some()
    }

    /// Events accepted by the active state, in declaration order.
    pub fn available_events(&self) -> Vec<&EventId> {
        self.config
            .state(self.state())
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Whether the active state accepts no events.
    pub fn is_final(&self) -> bool {
        self.config
            .state(self.state())
            .is_none_or(|definition| definition.is_terminal())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state().clone(),
            path: self.history.path().into_iter().cloned().collect(),
            cursor: self.history.cursor(),
        }
    }
}
