use crate::domain::ClockTickRate;
use crate::ports::TickSource;
use tracing::{debug, error, info};

/// Clock tick rate query with the fixed fallback applied.
///
/// Stateless: every call asks the source again, nothing is cached, and the
/// result is always a positive rate. Safe to share between threads when the
/// source is.
#[derive(Debug, Clone)]
pub struct ClockTicksQuery<S> {
    source: S,
}

impl<S: TickSource> ClockTicksQuery<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn clock_ticks_per_second(&self) -> ClockTickRate {
        debug!("getClockTicksPerSecond called");

        let raw = self.source.raw_clock_ticks();
        debug!("sysconf(_SC_CLK_TCK) returned: {}", raw);

        match ClockTickRate::from_raw(raw) {
            Some(rate) => {
                info!("Clock ticks per second: {}", rate);
                rate
            }
            None => {
                error!(
                    "sysconf returned invalid value: {}, using fallback {}",
                    raw,
                    ClockTickRate::FALLBACK
                );
                ClockTickRate::FALLBACK
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
