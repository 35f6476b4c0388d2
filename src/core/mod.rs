//! Core data types of the engine.
//!
//! - Identifier newtypes for states and events
//! - The static transition table ([`Config`])
//! - The linear undo log ([`History`])
//!
//! Nothing in this module logs or fails; the [`crate::machine`] layer
//! combines these pieces and reports errors.

mod config;
mod history;
mod id;

pub use config::{Config, StateDefinition};
pub use history::{History, HistoryEntry};
pub use id::{EventId, StateId};
