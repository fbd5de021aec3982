//! cpucore native library
//!
//! Wires the core queries to the operating system and exposes them to
//! managed runtimes (JNI and a C ABI), plus the config and CLI pieces used by
//! the `cpucore` binary.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod ffi;
pub mod logging;
pub mod services;

pub use cpucore_core::{ClockTickRate, CpuUsage};
pub use services::CpuCoreService;

/// Scheduler clock ticks per second from `sysconf`, 100 when unavailable
pub fn clock_ticks_per_second() -> ClockTickRate {
    CpuCoreService::system().clock_ticks_per_second()
}
