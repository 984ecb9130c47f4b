//! Core State trait for state identifiers.
//!
//! A state identifier is a value from a closed, caller-defined domain
//! (usually a fieldless enum). It is used both as the registry key and as
//! the argument handed to enter/exit hooks.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: identifiers are handed to hooks by value
/// - `Eq` + `Hash`: identifiers key the behaviour registry
/// - `Debug`: identifiers show up in diagnostics
/// - `Send` + `Sync`: hooks capturing identifiers may run on any executor
///
/// No ordering is required, and the machine never enumerates the whole
/// domain, only the identifiers that were explicitly registered.
///
/// # Example
///
/// ```rust
/// use statehooks::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Connection {
///     Idle,
///     Connecting,
///     Open,
/// }
///
/// impl State for Connection {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Connecting => "Connecting",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(Connection::Open.name(), "Open");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
