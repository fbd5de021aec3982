pub mod procfs;
pub mod sysconf;

pub use procfs::ProcfsStatSource;
pub use sysconf::SysconfTickSource;
