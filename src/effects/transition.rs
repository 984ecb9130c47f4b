//! Transition failures.

use crate::effects::hook::HookError;

/// Errors that can occur during `change_state`.
///
/// Which variant is returned tells the caller where the machine was left:
/// an exit failure happens before the current state changes, an enter
/// failure happens after.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("Exit hook of state '{state}' failed: {source}")]
    ExitHookFailed { state: String, source: HookError },

    #[error("Enter hook of state '{state}' failed: {source}")]
    EnterHookFailed { state: String, source: HookError },

    #[error("Target state '{state}' has no registered behavior (strict mode)")]
    UnregisteredTarget { state: String },
}

impl TransitionError {
    /// Name of the state whose hook or registration caused the failure.
    pub fn state(&self) -> &str {
        match self {
            Self::ExitHookFailed { state, .. }
            | Self::EnterHookFailed { state, .. }
            | Self::UnregisteredTarget { state } => state,
        }
    }
}
