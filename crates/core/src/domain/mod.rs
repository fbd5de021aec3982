pub mod ticks;
pub mod usage;

// Re-exports for convenience
pub use ticks::*;
pub use usage::*;
