//! Effectful part of the crate: hooks and the transition engine.
//!
//! This module provides the "imperative shell" around the pure core.
//!
//! # Key Concepts
//!
//! - **Hooks**: enter/exit callbacks stored as factories of Stillwater
//!   effects, so a single engine serves callers with synchronous and
//!   asynchronous hooks alike
//! - **Behaviors**: the per-state record holding both hooks and the last
//!   entry timestamp
//! - **State Machine**: owns the registry and sequences exit-then-enter on
//!   every transition
//!
//! Hook effects are built with the free-standing constructors from
//! `stillwater::prelude` (`pure()`, `fail()`, `from_fn()`) and boxed with
//! `.boxed()`.

mod behavior;
mod hook;
mod machine;
mod snapshot;
mod transition;

pub use behavior::StateBehavior;
pub use hook::{effect_hook, hook_fn, Hook, HookError};
pub use machine::StateMachine;
pub use snapshot::MachineSnapshot;
pub use transition::TransitionError;
