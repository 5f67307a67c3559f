//! rWorkday library root.
//! Exposes the time-accounting engine, its host adapters, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod host;
pub mod logging;
pub mod models;
pub mod signal;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Remaining { .. } => cli::commands::remaining::handle(&cli.command, cfg),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Checkpoints => cli::commands::checkpoints::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    logging::init(cli.verbose);

    // 3️⃣ load config once, honouring --config
    let path = Config::resolve_path(cli.config_path.as_deref());
    let cfg = Config::load_from(&path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
