use crate::cli::commands::{open_store, resolve_farm};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::forecast::ForecastLogic;
use crate::errors::AppResult;
use crate::utils::formatting::to_indented_json;

/// Print the farm's raw forecast row as JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Forecast { farm } = cmd {
        let farm_id = resolve_farm(farm, cfg)?;
        let store = open_store(cfg);

        let row = ForecastLogic::raw(&store, &farm_id)?;
        println!("{}", to_indented_json(&row)?);
    }

    Ok(())
}
