//! Exports reachable from managed runtimes.
//!
//! `jvm` carries the Android (Kotlin) entry points, `c_abi` the plain C
//! symbols used from Swift or C hosts. Both go through the guards below so a
//! panic never unwinds across the boundary.

pub mod c_abi;
pub mod jvm;

use crate::services::CpuCoreService;
use cpucore_core::error::{CoreError, Result};
use cpucore_core::{ClockTickRate, CpuUsage};
use std::panic;
use std::time::Duration;
use tracing::error;

/// Tick rate for a boundary call; a panic yields the fallback
pub(crate) fn guarded_clock_ticks() -> i64 {
    panic::catch_unwind(|| CpuCoreService::system().clock_ticks_per_second())
        .unwrap_or_else(|_| {
            error!("Clock tick query panicked, using fallback {}", ClockTickRate::FALLBACK);
            ClockTickRate::FALLBACK
        })
        .as_i64()
}

/// CPU usage for a boundary call; a panic becomes a port error
pub(crate) fn guarded_cpu_usage(interval: Duration) -> Result<CpuUsage> {
    panic::catch_unwind(|| CpuCoreService::system().cpu_usage(interval)).unwrap_or_else(|_| {
        error!("CPU usage sampling panicked");
        Err(anyhow::anyhow!("CPU usage sampling panicked").into())
    })
}

/// Managed callers hand over signed milliseconds; negative means none
pub(crate) fn interval_from_millis(millis: i64) -> Duration {
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}

pub const STATUS_OK: i32 = 0;
pub const STATUS_IO: i32 = -1;
pub const STATUS_PARSE: i32 = -2;
pub const STATUS_FAILED: i32 = -3;
pub const STATUS_NULL_POINTER: i32 = -4;

/// C status code for a core error
pub fn status_of(err: &CoreError) -> i32 {
    match err {
        CoreError::StatIo { .. } | CoreError::StatFormat { .. } => STATUS_IO,
        CoreError::StatParse { .. } => STATUS_PARSE,
        CoreError::Port { .. } => STATUS_FAILED,
    }
}
