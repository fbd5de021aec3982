use cpucore_core::ports::TickSource;

/// Reads the scheduler tick rate with `sysconf(_SC_CLK_TCK)`
#[derive(Debug, Default, Clone, Copy)]
pub struct SysconfTickSource;

impl SysconfTickSource {
    pub fn new() -> Self {
        Self
    }
}

impl TickSource for SysconfTickSource {
    #[cfg(unix)]
    fn raw_clock_ticks(&self) -> i64 {
        // SAFETY: sysconf only reads process-wide configuration.
        let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        i64::from(ticks)
    }

    // No sysconf here; report "unknown" so the query falls back
    #[cfg(not(unix))]
    fn raw_clock_ticks(&self) -> i64 {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_sysconf_reports_positive_rate() {
        assert!(SysconfTickSource::new().raw_clock_ticks() > 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_sysconf_is_stable() {
        let source = SysconfTickSource::new();
        assert_eq!(source.raw_clock_ticks(), source.raw_clock_ticks());
    }
}
