//! Binary-only glue: arguments, config, logging and the REPL loop.

mod args;
mod logging;
mod print;
mod repl;

use args::Cli;
use clap::Parser;
use roster::config::RosterConfig;
use roster::dispatcher::Dispatcher;
use roster::error::Result;
use roster::source::SyntheticRoster;
use std::io::{self, IsTerminal};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, !cli.no_color && io::stderr().is_terminal())?;

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => RosterConfig::default_dir()?,
    };

    let mut config = RosterConfig::load(&config_dir)?;
    if let Some(count) = cli.count {
        config.student_count = count;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;

    if cli.save_config {
        config.save(&config_dir)?;
    }
    debug!(?config, dir = %config_dir.display(), "configuration resolved");

    let mut dispatcher = Dispatcher::new(SyntheticRoster::today(), &config);
    repl::run(&mut dispatcher, config.history_size)
}
