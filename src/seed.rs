//! Session seed authority.
//!
//! A session seed is a 64-bit value sampled from the wall clock at
//! nanosecond resolution the first time any caller asks for it, then held
//! unchanged for the life of the process. Readbacks within one session all
//! see the same noise pattern; a restarted process sees a new one. The seed
//! is never persisted and is not a source of cryptographic randomness.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fallback when the clock reads before the epoch (the MT19937-64 reference
/// default seed).
const FALLBACK_SEED: u64 = 5489;

/// A 64-bit noise seed scoped to one session.
///
/// Obtained from [`session_seed`] for the process-wide session, or built
/// explicitly with [`from_raw`](Self::from_raw) when the host manages its
/// own session contexts (or in tests). Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSeed(u64);

impl SessionSeed {
    /// Samples the wall clock and truncates the nanosecond count to 64 bits.
    ///
    /// # Returns
    /// A seed that differs across process launches. Never fails: a clock
    /// reading before the Unix epoch falls back to a fixed default.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(FALLBACK_SEED);
        SessionSeed(nanos)
    }

    /// Wraps an explicit seed value.
    ///
    /// # Parameters
    /// - `value`: The raw 64-bit seed.
    pub const fn from_raw(value: u64) -> Self {
        SessionSeed(value)
    }

    /// Returns the raw 64-bit seed value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Returns the process-wide session seed, creating it on first call.
///
/// The first caller samples the clock; every later caller (from any thread)
/// observes that same fully initialized value. The initialize-once
/// transition is atomic: concurrent first callers cannot produce two seeds
/// or observe a partially written one.
///
/// # Examples
///
/// ```
/// let a = pixelveil::session_seed();
/// let b = pixelveil::session_seed();
/// assert_eq!(a, b);
/// ```
pub fn session_seed() -> SessionSeed {
    static SEED: OnceLock<SessionSeed> = OnceLock::new();
    *SEED.get_or_init(SessionSeed::from_clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_round_trip() {
        let seed = SessionSeed::from_raw(0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(seed.value(), 0xDEAD_BEEF_CAFE_F00D);
    }

    #[test]
    fn test_from_clock_does_not_panic() {
        let _ = SessionSeed::from_clock();
    }

    #[test]
    fn test_session_seed_is_stable() {
        let first = session_seed();
        for _ in 0..10 {
            assert_eq!(session_seed(), first);
        }
    }

    #[test]
    fn test_seed_copy_semantics() {
        let seed = SessionSeed::from_raw(7);
        let copy = seed;
        assert_eq!(seed, copy);
        assert_eq!(seed.value(), copy.value());
    }
}
