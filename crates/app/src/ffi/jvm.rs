#![allow(non_snake_case)]

use super::{guarded_clock_ticks, guarded_cpu_usage, interval_from_millis};
use crate::logging;
use cpucore_core::error::CoreError;
use jni::JNIEnv;
use jni::objects::JObject;
use jni::sys::{JNI_VERSION_1_6, JavaVM, jdouble, jint, jlong};
use std::ffi::c_void;
use tracing::{error, info};

/// Called by the VM from `System.loadLibrary`; installs the log sink.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    logging::init_native();
    info!("Native library loaded successfully");
    JNI_VERSION_1_6
}

/// `external fun getClockTicksPerSecondNative(): Long`
#[unsafe(no_mangle)]
pub extern "system" fn Java_expo_modules_cpucore_ReactNativeCpuCoreModule_getClockTicksPerSecondNative<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jlong {
    guarded_clock_ticks()
}

/// `external fun getCpuUsageNative(intervalMs: Long): Double`
///
/// Errors are raised as Java exceptions whose message starts with the
/// error code, and 0.0 is returned.
#[unsafe(no_mangle)]
pub extern "system" fn Java_expo_modules_cpucore_ReactNativeCpuCoreModule_getCpuUsageNative<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    interval_ms: jlong,
) -> jdouble {
    match guarded_cpu_usage(interval_from_millis(interval_ms)) {
        Ok(usage) => usage.percent(),
        Err(err) => {
            let message = exception_message(&err);
            error!("{}", message);
            if let Err(throw_err) = env.throw_new(exception_class(&err), &message) {
                error!("Failed to raise {}: {}", exception_class(&err), throw_err);
            }
            0.0
        }
    }
}

/// Java exception class matching the ones the Kotlin module already catches
pub fn exception_class(err: &CoreError) -> &'static str {
    match err {
        CoreError::StatIo { .. } | CoreError::StatFormat { .. } => "java/io/IOException",
        CoreError::StatParse { .. } => "java/lang/NumberFormatException",
        CoreError::Port { .. } => "java/lang/RuntimeException",
    }
}

pub fn exception_message(err: &CoreError) -> String {
    format!("{}: {}", err.code(), err)
}
