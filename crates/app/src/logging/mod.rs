//! Tracing setup for the CLI and for hosts that load the shared library.

#[cfg(any(target_os = "android", test))]
pub mod logcat;

use anyhow::{Result, anyhow};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logcat tag for native lines; the Kotlin module logs as `ReactNativeCpuCore`
pub const LOG_TAG: &str = "ReactNativeCpuCoreC++";

pub const DEFAULT_FILTER: &str = "info";

// Native hosts want the step-by-step query trace
const NATIVE_FILTER: &str = "debug";

/// `RUST_LOG` wins over the configured directive
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a stderr subscriber for the command line tool
pub fn init_cli(filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to install tracing subscriber: {err}"))
}

/// Install the platform sink once per process.
///
/// A subscriber the host already set is left alone.
pub fn init_native() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        let installed = tracing_subscriber::fmt()
            .with_env_filter(env_filter(NATIVE_FILTER))
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_level(false)
            .with_writer(logcat::Logcat::new(LOG_TAG))
            .try_init();

        #[cfg(not(target_os = "android"))]
        let installed = tracing_subscriber::fmt()
            .with_env_filter(env_filter(NATIVE_FILTER))
            .with_writer(std::io::stderr)
            .try_init();

        if installed.is_err() {
            tracing::debug!("Global subscriber already installed, keeping it");
        }
    });
}
