use super::{STATUS_NULL_POINTER, STATUS_OK, guarded_clock_ticks, guarded_cpu_usage, status_of};
use std::time::Duration;
use tracing::error;

/// Clock ticks per second, always > 0.
#[unsafe(no_mangle)]
pub extern "C" fn cpucore_clock_ticks_per_second() -> i64 {
    guarded_clock_ticks()
}

/// Sample this process's CPU usage over `interval_ms` and store the
/// percentage in `out`. Returns 0 on success or a negative status.
///
/// # Safety
///
/// `out` must be null or valid for writing one `f64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cpucore_app_cpu_usage(interval_ms: u64, out: *mut f64) -> i32 {
    if out.is_null() {
        error!("cpucore_app_cpu_usage called with a null output pointer");
        return STATUS_NULL_POINTER;
    }

    match guarded_cpu_usage(Duration::from_millis(interval_ms)) {
        Ok(usage) => {
            // SAFETY: non-null and writable per the contract above.
            unsafe { out.write(usage.percent()) };
            STATUS_OK
        }
        Err(err) => {
            error!("{}: {}", err.code(), err);
            status_of(&err)
        }
    }
}
