use clap::Parser;
use eyre::{Context, Result};
use log::info;

use taskdesk::cli::Cli;
use taskdesk::config::Config;
use taskdesk::menu;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env().filter_level(level).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if cli.no_color || !config.use_color {
        colored::control::set_override(false);
    }

    info!("taskdesk starting");

    menu::run_interactive(&config)
}
