//! Eager configuration checks.
//!
//! Machines accept any configuration by default and only discover a
//! dangling reference when they try to move into it. Hosts that prefer to
//! fail early can run [`validate_config`] themselves or build the machine
//! with [`ValidationMode::Eager`].
//!
//! Checks use Stillwater's `Validation` so that every violation is reported
//! in one pass rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use waypoint::core::{Config, StateDefinition};
//! use waypoint::validation::validate_config;
//!
//! let config = Config::new(
//!     "idle",
//!     [("idle", StateDefinition::new().on("start", "running"))],
//! );
//!
//! let result = validate_config(&config);
//! assert!(result.is_failure());
//! ```

pub mod violations;

pub use violations::{ConfigViolation, ValidationMode};

use crate::core::{Config, StateDefinition, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single configuration check.
pub type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Check every reference in `config`, accumulating ALL violations.
pub fn validate_config(config: &Config) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(if config.contains(config.initial()) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownInitialState {
            initial: config.initial().clone(),
        })
    });

    for (state, definition) in config.definitions() {
        checks.extend(check_targets(config, state, definition));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_targets<'a>(
    config: &'a Config,
    state: &'a StateId,
    definition: &'a StateDefinition,
) -> impl Iterator<Item = Check> + 'a {
    definition.transitions().iter().map(move |(event, target)| -> Check {
        if target.is_empty() {
            Validation::fail(ConfigViolation::EmptyTarget {
                state: state.clone(),
                event: event.clone(),
            })
        } else if !config.contains(target) {
            Validation::fail(ConfigViolation::DanglingTarget {
                state: state.clone(),
                event: event.clone(),
                target: target.clone(),
            })
        } else {
            Validation::success(())
        }
    })
}

/// Flatten a validation result into the list of violations it carries.
pub fn violations(result: Check) -> Vec<ConfigViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Config {
        Config::new(
            "idle",
            [
                ("idle", StateDefinition::new().on("start", "running")),
                (
                    "running",
                    StateDefinition::new().on("pause", "idle").on("stop", "stopped"),
                ),
                ("stopped", StateDefinition::new()),
            ],
        )
    }

    #[test]
    fn well_formed_config_passes() {
        assert!(validate_config(&player()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = Config::new(
            "nowhere",
            [
                ("a", StateDefinition::new().on("go", "missing").on("stay", "a")),
                ("b", StateDefinition::new().on("noop", "")),
            ],
        );

        let found = violations(validate_config(&config));

        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::UnknownInitialState { .. })));
        assert!(found.iter().any(|v| matches!(
            v,
            ConfigViolation::DanglingTarget { target, .. } if target == "missing"
        )));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::EmptyTarget { event, .. } if event == "noop")));
    }

    #[test]
    fn violations_of_success_is_empty() {
        assert!(violations(validate_config(&player())).is_empty());
    }

    #[test]
    fn violation_messages_name_the_reference() {
        let violation = ConfigViolation::DanglingTarget {
            state: "a".into(),
            event: "go".into(),
            target: "missing".into(),
        };
        assert_eq!(
            violation.to_string(),
            "Event 'go' in state 'a' targets undeclared state 'missing'"
        );
    }

    #[test]
    fn lazy_is_the_default_mode() {
        assert_eq!(ValidationMode::default(), ValidationMode::Lazy);
    }
}
