use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and the `weather_forecast` schema
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let cfg = Config::init_all(config_path, cli.db.clone(), cli.test)?;
    let db_path = &cfg.rdb.database;

    println!("⚙️  Initializing agriweather…");
    println!("🗄️  Database   : {}", db_path);

    init_db(db_path)?;
    tracing::info!(database = %db_path, "forecast schema initialized");

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
