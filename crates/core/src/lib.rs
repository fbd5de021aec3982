//! cpucore core - clock tick and CPU usage logic behind OS ports
//!
//! This crate holds the domain types, the ports (traits) that abstract the
//! operating system, and the queries built on top of them. It never calls
//! the OS itself - `sysconf`, procfs and the native boundary live in the
//! `cpucore` crate as adapters.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
