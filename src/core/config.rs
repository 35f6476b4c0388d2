//! Static transition table supplied to a state machine.
//!
//! A [`Config`] names the initial state and declares every state along with
//! the events it accepts. It is immutable once built and is shared by
//! reference with the machines that use it.
//!
//! Transition targets are not checked against the declared states here.
//! Dangling targets are only reported when a machine tries to move into
//! them, unless the host opts into eager validation (see
//! [`crate::validation`]).

use super::id::{EventId, StateId};
use crate::builder::ConfigBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transitions available from a single state.
///
/// Events keep their declaration order. Declaring the same event twice
/// replaces its target without moving it.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateDefinition;
///
/// let running = StateDefinition::new()
///     .on("pause", "idle")
///     .on("stop", "stopped");
///
/// assert_eq!(running.target("stop").map(|s| s.as_str()), Some("stopped"));
/// assert!(running.target("start").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStateDefinition")]
pub struct StateDefinition {
    transitions: Vec<(EventId, StateId)>,
}

/// Wire form of [`StateDefinition`]; may repeat events.
#[derive(Deserialize)]
struct RawStateDefinition {
    transitions: Vec<(EventId, StateId)>,
}

impl From<RawStateDefinition> for StateDefinition {
    fn from(raw: RawStateDefinition) -> Self {
        raw.transitions
            .into_iter()
            .fold(Self::new(), |mut definition, (event, target)| {
                definition.insert(event, target);
                definition
            })
    }
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.insert(event.into(), target.into());
        self
    }

    pub(crate) fn insert(&mut self, event: EventId, target: StateId) {
        match self.transitions.iter_mut().find(|(e, _)| *e == event) {
            Some(slot) => slot.1 = target,
            None => self.transitions.push((event, target)),
        }
    }

    /// Target state for `event`.
    ///
    /// Returns `None` when the event is not declared or its target is empty.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions
            .iter()
            .find(|(e, _)| e.as_str() == event)
            .map(|(_, target)| target)
            .filter(|target| !target.is_empty())
    }

    /// Events with a usable target, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.transitions
            .iter()
            .filter(|(_, target)| !target.is_empty())
            .map(|(event, _)| event)
    }

    /// All declared `(event, target)` pairs, including empty targets.
    pub fn transitions(&self) -> &[(EventId, StateId)] {
        &self.transitions
    }

    /// A state with no usable transitions is terminal.
    pub fn is_terminal(&self) -> bool {
        self.events().next().is_none()
    }
}

/// Declarative description of a flat state machine.
///
/// States keep their declaration order. Declaring a state twice keeps its
/// first position and the last definition.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Config, StateDefinition};
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDefinition::new().on("start", "running")),
///         ("running", StateDefinition::new().on("stop", "idle")),
///     ],
/// );
///
/// assert_eq!(config.initial(), "idle");
/// assert!(config.contains("running"));
/// assert!(!config.contains("Running"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    initial: StateId,
    states: Vec<(StateId, StateDefinition)>,
    index: HashMap<StateId, usize>,
}

impl Config {
    /// Build a configuration from an initial state and a list of states.
    ///
    /// Neither `initial` nor any transition target is required to be declared.
    pub fn new<I, S>(initial: impl Into<StateId>, states: I) -> Self
    where
        I: IntoIterator<Item = (S, StateDefinition)>,
        S: Into<StateId>,
    {
        let mut config = Self {
            initial: initial.into(),
            states: Vec::new(),
            index: HashMap::new(),
        };
        for (id, definition) in states {
            config.declare(id.into(), definition);
        }
        config
    }

    /// Start a fluent [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub(crate) fn declare(&mut self, id: StateId, definition: StateDefinition) {
        match self.index.get(&id) {
            Some(&position) => self.states[position].1 = definition,
            None => {
                self.index.insert(id.clone(), self.states.len());
                self.states.push((id, definition));
            }
        }
    }

    pub(crate) fn set_initial(&mut self, initial: StateId) {
        self.initial = initial;
    }

    pub(crate) fn definition_mut(&mut self, id: &StateId) -> &mut StateDefinition {
        if !self.index.contains_key(id) {
            self.declare(id.clone(), StateDefinition::new());
        }
        let position = self.index[id];
        &mut self.states[position].1
    }

    /// The configured starting state.
    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// Definition of a declared state.
    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.index.get(id).map(|&position| &self.states[position].1)
    }

    /// Whether `id` is a declared state.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Target of `event` when fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateId> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    /// Every declared state id, in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.iter().map(|(id, _)| id)
    }

    /// States from which `event` is a legal trigger, in declaration order.
    pub fn states_with_event<'a, 'e>(
        &'a self,
        event: &'e str,
    ) -> impl Iterator<Item = &'a StateId> + 'e
    where
        'a: 'e,
    {
        self.states
            .iter()
            .filter(move |(_, definition)| definition.target(event).is_some())
            .map(|(id, _)| id)
    }

    /// Every `(state, definition)` pair, in declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.states.iter().map(|(id, definition)| (id, definition))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
