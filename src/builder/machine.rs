//! Builder for constructing state machines.

use crate::core::Config;
use crate::machine::{FsmError, StateMachine};
use crate::validation::{validate_config, violations, ValidationMode};
use std::sync::Arc;

/// Builder for [`StateMachine`] with optional eager validation.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Config, StateDefinition};
/// use waypoint::validation::ValidationMode;
/// use waypoint::{FsmError, StateMachine};
///
/// let config = Config::new(
///     "idle",
///     [("idle", StateDefinition::new().on("start", "running"))],
/// );
///
/// // "running" is never declared
/// let result = StateMachine::builder()
///     .config(config)
///     .validation(ValidationMode::Eager)
///     .build();
///
/// assert!(matches!(result, Err(FsmError::InvalidConfiguration { .. })));
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    config: Option<Arc<Config>>,
    mode: ValidationMode,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition table (required).
    pub fn config(mut self, config: impl Into<Arc<Config>>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Set the transition table from an optional value.
    pub fn maybe_config(mut self, config: Option<Arc<Config>>) -> Self {
        self.config = config;
        self
    }

    /// Choose when the configuration is checked. Defaults to lazy.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the state machine.
    /// Returns an error if no configuration was supplied, or if eager
    /// validation finds any violation.
    pub fn build(self) -> Result<StateMachine, FsmError> {
        let config = self.config.ok_or(FsmError::MissingConfig)?;

        if self.mode == ValidationMode::Eager {
            let found = violations(validate_config(&config));
            if !found.is_empty() {
                tracing::warn!(violations = found.len(), "configuration rejected");
                return Err(FsmError::InvalidConfiguration { violations: found });
            }
        }

        Ok(StateMachine::new(config))
    }
}
