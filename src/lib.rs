//! agriweather library root.
//! Exposes the relational store, the forecast store, the indoor-temperature
//! derivation and the CLI dispatcher built on them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Farms => cli::commands::farms::handle(cfg),
        Commands::Forecast { .. } => cli::commands::forecast::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Purge { .. } => cli::commands::purge::handle(&cli.command, cfg),
        Commands::Indoor { .. } => cli::commands::indoor::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once per process
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    if let Some(custom_db) = &cli.db {
        cfg.rdb.database = custom_db.clone();
    }

    // the guard flushes the log file when run() returns
    let _guard = logging::init(&cfg.log.root(), cfg.log.level);

    dispatch(&cli, &cfg, &config_path)
}
