use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cpucore::cli::{CliArgs, Command};
use cpucore::config::Config;
use cpucore::{CpuCoreService, logging};

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(&cli_args, cli_args.config.clone())?;

    logging::init_cli(&config.logging.filter)?;
    info!("Starting cpucore");

    let service = CpuCoreService::system();
    match cli_args.command() {
        Command::Ticks => {
            println!("{}", service.clock_ticks_per_second());
        }
        Command::Usage { .. } => {
            let interval = config.sampling.interval();
            info!("Sampling CPU usage over {}ms", interval.as_millis());
            let usage = service
                .cpu_usage(interval)
                .context("Failed to sample CPU usage")?;
            println!("{}", usage);
        }
    }

    Ok(())
}
