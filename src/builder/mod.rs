//! Builder API for ergonomic configuration and machine construction.
//!
//! This module provides fluent builders and the [`fsm_config!`](crate::fsm_config)
//! macro for declaring transition tables with minimal boilerplate.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use machine::StateMachineBuilder;
