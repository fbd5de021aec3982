pub mod os;
pub mod time;

// Re-exports
pub use os::*;
pub use time::*;
