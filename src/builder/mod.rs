//! Builder API for configuring state behaviors.
//!
//! This module provides the fluent handle returned by
//! [`StateMachine::state`](crate::effects::StateMachine::state) and a
//! macro for declaring state enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod state;

pub use error::ConfigError;
pub use state::StateConfig;
