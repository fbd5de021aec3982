use crate::adapters::{ProcfsStatSource, SysconfTickSource};
use cpucore_core::app::{ClockTicksQuery, CpuUsageSampler};
use cpucore_core::error::Result;
use cpucore_core::ports::{Clock, ProcStatSource, SystemClock, TickSource};
use cpucore_core::{ClockTickRate, CpuUsage};
use std::time::Duration;

/// Composition root for the native queries.
///
/// Owns one adapter per port; the FFI exports and the CLI both go through
/// this so they share the same wiring.
pub struct CpuCoreService<T = SysconfTickSource, P = ProcfsStatSource, C = SystemClock> {
    ticks: T,
    stats: P,
    clock: C,
}

impl CpuCoreService {
    /// Service wired to sysconf, /proc/self/stat and the monotonic clock
    pub fn system() -> Self {
        Self::new(SysconfTickSource::new(), ProcfsStatSource::new(), SystemClock::new())
    }
}

impl<T, P, C> CpuCoreService<T, P, C>
where
    T: TickSource,
    P: ProcStatSource,
    C: Clock,
{
    pub fn new(ticks: T, stats: P, clock: C) -> Self {
        Self { ticks, stats, clock }
    }

    pub fn clock_ticks_per_second(&self) -> ClockTickRate {
        ClockTicksQuery::new(&self.ticks).clock_ticks_per_second()
    }

    pub fn cpu_usage(&self, interval: Duration) -> Result<CpuUsage> {
        CpuUsageSampler::new(&self.ticks, &self.stats, &self.clock).sample(interval)
    }
}
