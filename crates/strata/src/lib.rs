//! strata: the process shell around the layered operations.
//!
//! Parses the command line, loads configuration, installs logging, runs one
//! command through the boundary and hands whatever fault is left to the
//! [`monitor::Monitor`], which owns the exit code.
pub mod cli;
pub mod config;
pub mod monitor;
pub mod tracing_setup;

use std::process::ExitCode;

use clap::Parser;
use strata_api::EndPoint;
use strata_app::UseCases;
use strata_gateway::ExternalResource;
use tracing::info;

use crate::cli::Cli;
use crate::config::StrataConfig;
use crate::monitor::Monitor;

pub fn try_main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = StrataConfig::load(cli.config.as_deref())?;
    let _guard = tracing_setup::init_tracing(&config.log)?;
    info!(command = ?cli.command, "starting");

    let endpoint = EndPoint::new(UseCases::new(ExternalResource));
    let monitor = Monitor::from_config(&config.monitor);
    match monitor.supervise(cli.command.run(&endpoint)) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(code) => Ok(ExitCode::from(code)),
    }
}
