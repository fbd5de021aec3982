use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "cpucore")]
#[command(about = "Query the scheduler clock tick rate and this process's CPU usage")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (overrides config; RUST_LOG overrides both)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Command {
    /// Print clock ticks per second (the default)
    Ticks,

    /// Sample this process's CPU usage
    Usage {
        /// Sampling window in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

impl CliArgs {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ticks)
    }
}
