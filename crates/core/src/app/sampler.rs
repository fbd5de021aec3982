use crate::app::ClockTicksQuery;
use crate::domain::CpuUsage;
use crate::error::Result;
use crate::ports::{Clock, ProcStatSource, TickSource};
use std::time::Duration;
use tracing::{debug, warn};

/// Window used when the caller does not pick one
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// Measures the current process's CPU usage over a sampling window
pub struct CpuUsageSampler<T, P, C> {
    ticks: ClockTicksQuery<T>,
    stats: P,
    clock: C,
}

impl<T, P, C> CpuUsageSampler<T, P, C>
where
    T: TickSource,
    P: ProcStatSource,
    C: Clock,
{
    pub fn new(ticks: T, stats: P, clock: C) -> Self {
        Self {
            ticks: ClockTicksQuery::new(ticks),
            stats,
            clock,
        }
    }

    /// Read the CPU counters twice, `interval` apart, and convert the
    /// difference to a percentage of one core.
    pub fn sample(&self, interval: Duration) -> Result<CpuUsage> {
        debug!("Reading first app CPU stat");
        let first = self.stats.read_self_stat()?;
        let start = self.clock.elapsed();

        debug!("Waiting {}ms for stable measurement...", interval.as_millis());
        self.clock.sleep(interval);

        debug!("Reading second app CPU stat");
        let second = self.stats.read_self_stat()?;
        let end = self.clock.elapsed();

        let cpu_time_diff = second.total().saturating_sub(first.total());
        let rate = self.ticks.clock_ticks_per_second();
        let elapsed_ticks = rate.ticks_in(end.saturating_sub(start));

        debug!(
            "Calculation: cpuTimeDiff={}, elapsedTicks={}, ticksPerSecond={}",
            cpu_time_diff, elapsed_ticks, rate
        );

        if elapsed_ticks == 0 {
            warn!("No elapsed time detected, returning 0%");
            return Ok(CpuUsage::IDLE);
        }

        let usage = CpuUsage::from_ticks(cpu_time_diff, elapsed_ticks);
        debug!("App CPU usage: {}", usage);
        Ok(usage)
    }
}
