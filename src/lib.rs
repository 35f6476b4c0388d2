//! Waypoint: a flat finite state machine with undo/redo history
//!
//! Waypoint tracks a single active state against a declarative transition
//! table and records every move in a linear history that can be walked
//! backwards and forwards.
//!
//! # Core Concepts
//!
//! - **Config**: Immutable table of states and the events each accepts
//! - **StateMachine**: Active state plus history, driven by `trigger` or
//!   direct `change_state`
//! - **History**: Linear undo log; a new move after an undo discards the
//!   redoable branch
//!
//! Transition targets are checked when they are traversed, not when the
//! configuration is built. Use [`validation::ValidationMode::Eager`] to
//! reject bad configurations up front.
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "start" => "running" },
//!         "running" => { "pause" => "idle", "stop" => "stopped" },
//!         "stopped" => {},
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("start").unwrap();
//! machine.trigger("stop").unwrap();
//!
//! assert!(machine.undo());
//! assert!(machine.undo());
//! assert!(!machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! // a new move drops the redoable "running -> stopped" branch
//! machine.trigger("start").unwrap();
//! assert!(!machine.redo());
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateMachineBuilder};
pub use self::core::{Config, EventId, History, StateDefinition, StateId};
pub use machine::{FsmError, Snapshot, StateMachine};
