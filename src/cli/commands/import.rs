use crate::cli::commands::{open_store, resolve_farm};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::forecast::ForecastLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { farm, file } = cmd {
        let farm_id = resolve_farm(farm, cfg)?;
        let store = open_store(cfg);

        ForecastLogic::import(&store, &farm_id, Path::new(file))?;
        success(format!("Forecast of farm {} stored from {}", farm_id, file));
    }

    Ok(())
}
