use crate::core::indoor::derive;
use crate::db::forecast::ForecastStore;
use crate::db::row::ResultRow;
use crate::errors::{AppError, AppResult};
use crate::models::IndoorTempReport;
use std::fs;
use std::path::Path;

pub struct ForecastLogic;

impl ForecastLogic {
    /// The farm's raw forecast row. No row is an error at this level.
    pub fn raw(store: &ForecastStore, farm_id: &str) -> AppResult<ResultRow> {
        store
            .fetch_forecast_by_farm(farm_id)?
            .ok_or_else(|| AppError::NoForecast(farm_id.to_string()))
    }

    /// Fetch the farm's payload and derive its indoor temperatures.
    /// Derivation only runs once a payload is actually present.
    pub fn indoor(store: &ForecastStore, farm_id: &str) -> AppResult<IndoorTempReport> {
        let payload = store
            .forecast_payload(farm_id)?
            .ok_or_else(|| AppError::NoForecast(farm_id.to_string()))?;

        Ok(derive(&payload)?)
    }

    /// Store the payload file verbatim as the farm's forecast.
    pub fn import(store: &ForecastStore, farm_id: &str, file: &Path) -> AppResult<usize> {
        let data = fs::read_to_string(file)?;
        Ok(store.upsert_forecast(farm_id, data.trim_end())?)
    }

    pub fn purge(store: &ForecastStore, farm_id: &str) -> AppResult<()> {
        if store.purge_farm(farm_id) {
            Ok(())
        } else {
            Err(AppError::PurgeFailed(farm_id.to_string()))
        }
    }
}
