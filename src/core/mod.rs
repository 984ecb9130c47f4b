//! Core state machine types.
//!
//! This module contains the pure part of the crate:
//! - State identifiers via the `State` trait
//! - Dwell-time arithmetic over entry timestamps
//!
//! Nothing here runs hooks or mutates a machine; that lives in
//! [`crate::effects`].

mod dwell;
mod state;

pub use dwell::elapsed_since;
pub use state::State;
