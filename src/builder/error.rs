//! Errors raised while assembling a configuration.

use thiserror::Error;

/// Errors that can occur when building a [`Config`](crate::core::Config).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
