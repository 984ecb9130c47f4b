//! Dwell-time arithmetic.
//!
//! Pure helpers for turning entry timestamps into elapsed durations.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Elapsed time between `entered_at` and `now`.
///
/// Wall-clock adjustments can put `now` before `entered_at`; that case
/// yields a zero duration rather than an error.
///
/// # Example
///
/// ```rust
/// use statehooks::core::elapsed_since;
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let now = Utc::now();
/// let entered = now - chrono::Duration::milliseconds(250);
///
/// assert_eq!(elapsed_since(entered, now), Duration::from_millis(250));
/// assert_eq!(elapsed_since(now, entered), Duration::ZERO);
/// ```
pub fn elapsed_since(entered_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(entered_at)
        .to_std()
        .unwrap_or(Duration::ZERO)
}
