//! State machine that fires enter/exit hooks on transitions.

use crate::builder::{ConfigError, StateConfig};
use crate::core::State;
use crate::effects::behavior::StateBehavior;
use crate::effects::snapshot::MachineSnapshot;
use crate::effects::transition::TransitionError;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// State machine tracking one current state and the hooks of registered states.
///
/// Registration is optional per state: a state without a behavior simply
/// has no hooks. By default any target is accepted by
/// [`change_state`](Self::change_state); see [`strict`](Self::strict) for
/// the opt-in validation mode.
///
/// The machine is a plain mutable value with no internal locking. Callers
/// must not interleave two transitions on the same instance; `&mut self`
/// on `change_state` enforces this for safe code.
///
/// # Example
///
/// ```rust
/// use statehooks::effects::StateMachine;
/// use statehooks::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Start,
///         End,
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut machine: StateMachine<Phase, ()> = StateMachine::new(Phase::Start);
/// machine
///     .state(Phase::End)?
///     .on_enter(|s| println!("entered {:?}", s))
///     .end_configure()
///     .state(Phase::Start)?
///     .on_exit(|s| println!("left {:?}", s));
///
/// machine.change_state_blocking(Phase::End, &())?;
/// assert!(machine.is_in_state(&Phase::End));
/// # Ok(())
/// # }
/// ```
pub struct StateMachine<S: State + 'static, Env: Clone + Send + Sync + 'static> {
    current: S,
    registry: HashMap<S, StateBehavior<S, Env>>,
    strict: bool,
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> StateMachine<S, Env> {
    /// Create a permissive machine in the initial state.
    ///
    /// No hook fires for the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            registry: HashMap::new(),
            strict: false,
        }
    }

    /// Create a machine that rejects transitions to unregistered targets.
    pub fn strict(initial: S) -> Self {
        Self {
            strict: true,
            ..Self::new(initial)
        }
    }

    /// Register a behavior for `state` and return a handle to configure it.
    ///
    /// Fails if `state` is already registered; the existing behavior and
    /// its hooks are left untouched.
    pub fn state(&mut self, state: S) -> Result<StateConfig<'_, S, Env>, ConfigError> {
        if self.registry.contains_key(&state) {
            return Err(ConfigError::DuplicateState {
                state: state.name().to_string(),
            });
        }

        trace!(state = state.name(), "registering state behavior");
        self.registry.insert(state.clone(), StateBehavior::new());
        Ok(StateConfig::new(self, state))
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether `state` is the current state (pure)
    pub fn is_in_state(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Whether transitions to unregistered targets are rejected (pure)
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether `state` has a registered behavior (pure)
    pub fn is_registered(&self, state: &S) -> bool {
        self.registry.contains_key(state)
    }

    /// Iterate over registered states, in no particular order.
    pub fn registered_states(&self) -> impl Iterator<Item = &S> {
        self.registry.keys()
    }

    /// Get the behavior registered for `state`.
    pub fn behavior(&self, state: &S) -> Option<&StateBehavior<S, Env>> {
        self.registry.get(state)
    }

    pub(crate) fn behavior_mut(&mut self, state: &S) -> Option<&mut StateBehavior<S, Env>> {
        self.registry.get_mut(state)
    }

    /// Dwell time of the current state.
    ///
    /// `None` if the current state is unregistered or has not been entered
    /// through a transition yet (the initial state, for instance).
    pub fn time_in_state(&self) -> Option<Duration> {
        self.registry
            .get(&self.current)
            .and_then(StateBehavior::time_in_state)
    }

    /// Take a serializable snapshot of the machine.
    pub fn snapshot(&self) -> MachineSnapshot {
        let mut registered_states: Vec<String> = self
            .registry
            .keys()
            .map(|state| state.name().to_string())
            .collect();
        registered_states.sort();

        MachineSnapshot {
            taken_at: Utc::now(),
            current_state: self.current.name().to_string(),
            registered_states,
            strict: self.strict,
            time_in_state_ms: self
                .time_in_state()
                .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)),
        }
    }

    /// Transition to `target`.
    ///
    /// Runs the exit hook of the current state to completion, switches the
    /// current state, stamps the entry time and then runs the enter hook of
    /// `target`. A self-transition is a no-op and fires nothing.
    ///
    /// On an exit hook failure the current state is unchanged. On an enter
    /// hook failure the machine is already in `target`. Nothing is rolled
    /// back in either case.
    pub async fn change_state(&mut self, target: S, env: &Env) -> Result<(), TransitionError> {
        if target == self.current {
            debug!(state = target.name(), "self-transition ignored");
            return Ok(());
        }

        if self.strict && !self.registry.contains_key(&target) {
            warn!(state = target.name(), "rejected transition to unregistered state");
            return Err(TransitionError::UnregisteredTarget {
                state: target.name().to_string(),
            });
        }

        let from = self.current.clone();
        debug!(from = from.name(), to = target.name(), "changing state");

        if let Some(behavior) = self.registry.get(&from) {
            trace!(state = from.name(), "firing exit hook");
            behavior
                .fire_on_exit(from.clone(), env)
                .await
                .map_err(|source| {
                    warn!(state = from.name(), error = %source, "exit hook failed");
                    TransitionError::ExitHookFailed {
                        state: from.name().to_string(),
                        source,
                    }
                })?;
        }

        self.current = target.clone();

        match self.registry.get_mut(&target) {
            Some(behavior) => {
                trace!(state = target.name(), "firing enter hook");
                behavior
                    .fire_on_enter(target.clone(), env)
                    .await
                    .map_err(|source| {
                        warn!(state = target.name(), error = %source, "enter hook failed");
                        TransitionError::EnterHookFailed {
                            state: target.name().to_string(),
                            source,
                        }
                    })?;
            }
            None => debug!(state = target.name(), "entered unregistered state"),
        }

        Ok(())
    }

    /// Transition to `target`, blocking the calling thread until both hooks
    /// have completed.
    ///
    /// Same semantics as [`change_state`](Self::change_state). Must not be
    /// called from inside an async runtime's worker thread.
    ///
    /// The future is driven by `futures::executor::block_on`, which provides
    /// no Tokio reactor: a hook that uses Tokio timers or I/O panics here
    /// even when called from a plain thread. Use `change_state` from within
    /// a Tokio runtime for such hooks. Hooks that suspend on
    /// runtime-agnostic futures (channels, for instance) are fine.
    pub fn change_state_blocking(&mut self, target: S, env: &Env) -> Result<(), TransitionError> {
        futures::executor::block_on(self.change_state(target, env))
    }
}
