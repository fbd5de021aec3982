use crate::domain::ProcStat;
use crate::error::Result;

/// Port for the OS clock tick query
pub trait TickSource: Send + Sync {
    /// Raw value as the OS reports it; <= 0 means unknown/unsupported
    fn raw_clock_ticks(&self) -> i64;
}

/// Port for reading the current process's CPU counters
pub trait ProcStatSource: Send + Sync {
    fn read_self_stat(&self) -> Result<ProcStat>;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn raw_clock_ticks(&self) -> i64 {
        (**self).raw_clock_ticks()
    }
}

impl<T: ProcStatSource + ?Sized> ProcStatSource for &T {
    fn read_self_stat(&self) -> Result<ProcStat> {
        (**self).read_self_stat()
    }
}

/// Tick source that always reports the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedTickSource(pub i64);

impl TickSource for FixedTickSource {
    fn raw_clock_ticks(&self) -> i64 {
        self.0
    }
}
