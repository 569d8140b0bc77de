use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let farms = store.list_farms()?;

    if farms.is_empty() {
        info("No forecasts stored.");
        return Ok(());
    }

    for farm in farms {
        println!("{}", farm);
    }

    Ok(())
}
