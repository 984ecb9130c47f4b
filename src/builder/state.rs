//! Fluent handle for configuring one registered state.

use crate::core::State;
use crate::effects::{effect_hook, hook_fn, Hook, HookError, StateMachine};
use stillwater::effect::BoxedEffect;

/// Handle returned by [`StateMachine::state`] to attach hooks to a state.
///
/// The handle borrows the machine and remembers which state it configures.
/// Setting a hook overwrites any hook previously set for the same slot.
/// [`end_configure`](Self::end_configure) hands the machine back so the
/// chain can continue with the next state.
pub struct StateConfig<'m, S: State + 'static, Env: Clone + Send + Sync + 'static> {
    machine: &'m mut StateMachine<S, Env>,
    state: S,
}

impl<'m, S: State + 'static, Env: Clone + Send + Sync + 'static> StateConfig<'m, S, Env> {
    pub(crate) fn new(machine: &'m mut StateMachine<S, Env>, state: S) -> Self {
        Self { machine, state }
    }

    /// The state this handle configures.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Run `callback` whenever this state is entered.
    pub fn on_enter<F>(self, callback: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.enter_hook(hook_fn(callback))
    }

    /// Run `callback` whenever this state is left.
    pub fn on_exit<F>(self, callback: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.exit_hook(hook_fn(callback))
    }

    /// Run the effect built by `factory` whenever this state is entered.
    ///
    /// The effect may fail or suspend; the transition awaits it.
    pub fn on_enter_effect<F>(self, factory: F) -> Self
    where
        F: Fn(S) -> BoxedEffect<(), HookError, Env> + Send + Sync + 'static,
    {
        self.enter_hook(effect_hook(factory))
    }

    /// Run the effect built by `factory` whenever this state is left.
    pub fn on_exit_effect<F>(self, factory: F) -> Self
    where
        F: Fn(S) -> BoxedEffect<(), HookError, Env> + Send + Sync + 'static,
    {
        self.exit_hook(effect_hook(factory))
    }

    /// Set a prebuilt enter hook.
    pub fn enter_hook(self, hook: Hook<S, Env>) -> Self {
        if let Some(behavior) = self.machine.behavior_mut(&self.state) {
            behavior.set_on_enter(hook);
        }
        self
    }

    /// Set a prebuilt exit hook.
    pub fn exit_hook(self, hook: Hook<S, Env>) -> Self {
        if let Some(behavior) = self.machine.behavior_mut(&self.state) {
            behavior.set_on_exit(hook);
        }
        self
    }

    /// Finish configuring this state and return the machine.
    pub fn end_configure(self) -> &'m mut StateMachine<S, Env> {
        self.machine
    }
}
