//! [`Clock`] implementations.

use chrono::Utc;

use crate::traits::Clock;

/// Wall-clock time, saturated into the `u32` second range used by the tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_sec(&self) -> u32 {
        let secs = Utc::now().timestamp().max(0);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

/// A clock pinned to one second. Used for replaying snapshots and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn now_sec(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_second() {
        assert_eq!(FixedClock(1_600_000_000).now_sec(), 1_600_000_000);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_sec() > 1_577_836_800);
    }
}
