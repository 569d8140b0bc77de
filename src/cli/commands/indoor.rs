use crate::cli::commands::{open_store, resolve_farm};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::forecast::ForecastLogic;
use crate::errors::AppResult;
use crate::utils::formatting::to_indented_json;

/// Derive the farm's indoor temperatures and print them as JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Indoor { farm } = cmd {
        let farm_id = resolve_farm(farm, cfg)?;
        let store = open_store(cfg);

        let report = ForecastLogic::indoor(&store, &farm_id)?;
        tracing::info!(farm = %farm_id, samples = report.len(), "indoor temperatures derived");

        println!("{}", to_indented_json(&report)?);
    }

    Ok(())
}
