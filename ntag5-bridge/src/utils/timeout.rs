//! Timing defaults used by the bridge loop.
//!
//! Keep these helpers minimal: they centralize the scheduler tick and the
//! watchdog deadline so configuration and tests express them the same way.

use std::time::Duration;

/// Delay between two state machine ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Time the microcontroller gets to claim the mailbox before the bridge
/// gives up.
pub const DEFAULT_WATCHDOG_MS: u64 = 5000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default tick interval as Duration.
pub fn default_tick_interval() -> Duration {
    ms(DEFAULT_TICK_INTERVAL_MS)
}

/// Convenience: default watchdog deadline as Duration.
pub fn default_watchdog() -> Duration {
    ms(DEFAULT_WATCHDOG_MS)
}

/// Duration in whole milliseconds, saturating at `u64::MAX`.
pub fn as_millis_u64(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
