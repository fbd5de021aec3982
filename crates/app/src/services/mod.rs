pub mod cpu_service;

pub use cpu_service::CpuCoreService;
