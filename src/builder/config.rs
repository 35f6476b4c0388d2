//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Config, EventId, StateDefinition, StateId};

/// Builder for [`Config`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("locked")
///     .transition("locked", "coin", "unlocked")
///     .transition("unlocked", "push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.len(), 2);
/// assert_eq!(config.target("locked", "coin").map(|s| s.as_str()), Some("unlocked"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its full definition.
    ///
    /// Redeclaring a state replaces its definition.
    pub fn state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.config.declare(id.into(), definition);
        self
    }

    /// Add one transition, declaring `from` if needed.
    ///
    /// `to` is not declared; it must be declared separately to be reachable.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.config
            .definition_mut(&from.into())
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut config = self.config;
        config.set_initial(initial);
        Ok(config)
    }
}
