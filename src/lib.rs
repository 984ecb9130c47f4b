//! Statehooks: enter/exit hooks for enum-driven state machines
//!
//! Statehooks lets a component declare "when I enter or leave state X, run
//! Y" for a closed set of state identifiers, track how long the current
//! state has been held, and drive transitions by name.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash` identifier implementing the `State` trait
//! - **Hooks**: enter/exit callbacks built on Stillwater effects, awaited in
//!   order (exit of the old state, then enter of the new one)
//! - **Dwell time**: the entry timestamp of the current state
//!
//! Registration is optional: transitioning to a state without a behavior
//! changes the current state and fires nothing.
//!
//! # Example
//!
//! ```rust
//! use statehooks::{state_enum, StateMachine};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Phase {
//!         Start,
//!         End,
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entered = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&entered);
//!
//! let mut machine: StateMachine<Phase, ()> = StateMachine::new(Phase::Start);
//! machine
//!     .state(Phase::End)?
//!     .on_enter(move |_| flag.store(true, Ordering::SeqCst));
//!
//! machine.change_state_blocking(Phase::End, &())?;
//!
//! assert!(machine.is_in_state(&Phase::End));
//! assert!(entered.load(Ordering::SeqCst));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use builder::{ConfigError, StateConfig};
pub use core::State;
pub use effects::{
    Hook, HookError, MachineSnapshot, StateBehavior, StateMachine, TransitionError,
};
