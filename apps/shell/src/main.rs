#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{demo, order};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use forno_kernel::config::load_config;
use forno_kernel::domain::config::ShellConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ShellConfig = load_config(cli.config.as_deref())?;
    let _logger = services::logging::init(&config.log, cli.verbose)?;

    match cli.command {
        AppCommands::Order(args) => order::run_order(args)?,
        AppCommands::Demo {} => demo::run_demo()?,
    }

    Ok(())
}
