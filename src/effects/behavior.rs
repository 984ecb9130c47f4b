//! Per-state behavior record.

use crate::core::{elapsed_since, State};
use crate::effects::hook::{Hook, HookError};
use chrono::{DateTime, Utc};
use std::time::Duration;
use stillwater::effect::Effect;

/// Hooks and entry timestamp for one registered state.
///
/// Behaviors are created by [`StateMachine::state`](crate::effects::StateMachine::state)
/// and owned by the machine's registry for its whole lifetime. Hooks are
/// configured through the [`StateConfig`](crate::builder::StateConfig)
/// handle; this type only exposes read access.
pub struct StateBehavior<S: State + 'static, Env: Clone + Send + Sync + 'static> {
    on_enter: Option<Hook<S, Env>>,
    on_exit: Option<Hook<S, Env>>,
    entered_at: Option<DateTime<Utc>>,
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> StateBehavior<S, Env> {
    pub(crate) fn new() -> Self {
        Self {
            on_enter: None,
            on_exit: None,
            entered_at: None,
        }
    }

    pub(crate) fn set_on_enter(&mut self, hook: Hook<S, Env>) {
        self.on_enter = Some(hook);
    }

    pub(crate) fn set_on_exit(&mut self, hook: Hook<S, Env>) {
        self.on_exit = Some(hook);
    }

    /// Whether an enter hook is attached.
    pub fn has_enter_hook(&self) -> bool {
        self.on_enter.is_some()
    }

    /// Whether an exit hook is attached.
    pub fn has_exit_hook(&self) -> bool {
        self.on_exit.is_some()
    }

    /// When this state was last entered through a transition.
    ///
    /// `None` until the first transition into the state.
    pub fn entered_at(&self) -> Option<DateTime<Utc>> {
        self.entered_at
    }

    /// Time elapsed since this state was last entered.
    ///
    /// Only meaningful while the state is current. For a state that has
    /// since been left, the value keeps growing from the last entry and
    /// says nothing about how long the state was actually held.
    pub fn time_in_state(&self) -> Option<Duration> {
        self.entered_at
            .map(|entered_at| elapsed_since(entered_at, Utc::now()))
    }

    /// Stamp the entry time, then run the enter hook.
    ///
    /// The stamp happens first so that a failing hook still leaves the
    /// entry recorded.
    pub(crate) async fn fire_on_enter(&mut self, state: S, env: &Env) -> Result<(), HookError> {
        self.entered_at = Some(Utc::now());
        match self.on_enter.as_ref().map(|hook| hook(state)) {
            Some(effect) => effect.run(env).await,
            None => Ok(()),
        }
    }

    pub(crate) async fn fire_on_exit(&self, state: S, env: &Env) -> Result<(), HookError> {
        match self.on_exit.as_ref().map(|hook| hook(state)) {
            Some(effect) => effect.run(env).await,
            None => Ok(()),
        }
    }
}
