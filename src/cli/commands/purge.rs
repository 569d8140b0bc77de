use crate::cli::commands::{open_store, resolve_farm};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::forecast::ForecastLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Purge { farm } = cmd {
        let farm_id = resolve_farm(farm, cfg)?;
        let store = open_store(cfg);

        ForecastLogic::purge(&store, &farm_id)?;
        success(format!("Forecast of farm {} deleted.", farm_id));
    }

    Ok(())
}
