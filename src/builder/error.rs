//! Configuration errors for state registration.

use thiserror::Error;

/// Errors that can occur while configuring a state machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("State '{state}' is already registered. Configure each state with a single .state(id) call")]
    DuplicateState { state: String },
}
