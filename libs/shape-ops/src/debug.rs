//! Process-wide diagnostic verbosity.
//!
//! The level only gates `tracing` events; it never changes geometric results.
//! Tiers are defined in `config::constants` (`DEBUG_PARAMETERS` and up).

use std::sync::atomic::{AtomicU32, Ordering};

static LEVEL: AtomicU32 = AtomicU32::new(0);

/// Sets the verbosity and returns the resulting level.
///
/// Negative requests leave the level unchanged.
///
/// # Examples
/// ```
/// use shape_ops::debug;
/// let previous = debug::level();
/// assert_eq!(debug::set_level(-1), previous);
/// ```
pub fn set_level(level: i64) -> u32 {
    if level >= 0 {
        let clamped = u32::try_from(level).unwrap_or(u32::MAX);
        LEVEL.store(clamped, Ordering::Relaxed);
    }
    level_now()
}

/// Current verbosity.
pub fn level() -> u32 {
    level_now()
}

/// True when events of `tier` should be emitted.
#[inline]
pub fn enabled(tier: u32) -> bool {
    level_now() >= tier
}

#[inline]
fn level_now() -> u32 {
    LEVEL.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The level is global, so every assertion lives in one test.
    #[test]
    fn set_level_semantics() {
        assert_eq!(set_level(3), 3);
        assert!(enabled(2));
        assert!(enabled(3));
        assert!(!enabled(4));
        assert_eq!(set_level(-5), 3);
        assert_eq!(level(), 3);
        assert_eq!(set_level(i64::MAX), u32::MAX);
        assert_eq!(set_level(0), 0);
        assert!(!enabled(1));
    }
}
