//! `MakeWriter` that sends each formatted event to the Android log.

use std::ffi::{CStr, CString, c_int};
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

// android/log.h priorities
pub const ANDROID_LOG_VERBOSE: c_int = 2;
pub const ANDROID_LOG_DEBUG: c_int = 3;
pub const ANDROID_LOG_INFO: c_int = 4;
pub const ANDROID_LOG_WARN: c_int = 5;
pub const ANDROID_LOG_ERROR: c_int = 6;

#[cfg(target_os = "android")]
#[link(name = "log")]
unsafe extern "C" {
    fn __android_log_write(
        prio: c_int,
        tag: *const std::ffi::c_char,
        text: *const std::ffi::c_char,
    ) -> c_int;
}

pub fn priority_for(level: &Level) -> c_int {
    match *level {
        Level::TRACE => ANDROID_LOG_VERBOSE,
        Level::DEBUG => ANDROID_LOG_DEBUG,
        Level::INFO => ANDROID_LOG_INFO,
        Level::WARN => ANDROID_LOG_WARN,
        Level::ERROR => ANDROID_LOG_ERROR,
    }
}

/// Text handed to liblog: trailing newline dropped, interior NULs removed
pub fn line_text(buf: &[u8]) -> CString {
    let trimmed = buf.strip_suffix(b"\n").unwrap_or(buf);
    let bytes: Vec<u8> = trimmed.iter().copied().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}

pub struct Logcat {
    tag: CString,
}

impl Logcat {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: line_text(tag.as_bytes()),
        }
    }

    fn line(&self, priority: c_int) -> LogcatLine<'_> {
        LogcatLine {
            tag: &self.tag,
            priority,
            buf: Vec::new(),
        }
    }
}

/// One event; written out when dropped
pub struct LogcatLine<'a> {
    tag: &'a CStr,
    priority: c_int,
    buf: Vec<u8>,
}

impl LogcatLine<'_> {
    pub fn priority(&self) -> c_int {
        self.priority
    }
}

impl io::Write for LogcatLine<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogcatLine<'_> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = line_text(&self.buf);
        write_line(self.priority, self.tag, &text);
    }
}

#[cfg(target_os = "android")]
fn write_line(priority: c_int, tag: &CStr, text: &CStr) {
    // SAFETY: both pointers are NUL-terminated and outlive the call.
    unsafe {
        __android_log_write(priority, tag.as_ptr(), text.as_ptr());
    }
}

#[cfg(not(target_os = "android"))]
fn write_line(_priority: c_int, _tag: &CStr, _text: &CStr) {}

impl<'a> MakeWriter<'a> for Logcat {
    type Writer = LogcatLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.line(ANDROID_LOG_INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line(priority_for(meta.level()))
    }
}
