use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::time::Duration;

/// Tick rate reported when the OS gives no usable answer
pub const FALLBACK_CLOCK_TICKS: u64 = 100;

/// Scheduler clock tick rate in ticks per second, always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTickRate(NonZeroU64);

impl ClockTickRate {
    pub const FALLBACK: ClockTickRate = ClockTickRate(NonZeroU64::new(FALLBACK_CLOCK_TICKS).unwrap());

    /// Accept a raw OS value; anything <= 0 is not a rate
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw <= 0 {
            return None;
        }
        NonZeroU64::new(raw as u64).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// Value as handed across the native boundary
    pub fn as_i64(&self) -> i64 {
        // Built from a positive i64 or the fallback, so this never saturates
        i64::try_from(self.0.get()).unwrap_or(i64::MAX)
    }

    /// Number of whole ticks that fit in `elapsed`
    pub fn ticks_in(&self, elapsed: Duration) -> u64 {
        let ticks = elapsed.as_millis() * u128::from(self.get()) / 1000;
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

impl Default for ClockTickRate {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl std::fmt::Display for ClockTickRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
