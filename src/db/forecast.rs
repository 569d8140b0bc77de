//! The `weather_forecast` table on top of the generic store.

use crate::db::credentials::Credentials;
use crate::db::row::ResultRow;
use crate::db::store::{RelationalStore, StoreError, StoreResult};
use crate::logging::Logger;
use chrono::Local;
use rusqlite::types::Value;
use std::sync::Arc;

/// Forecast queries for one farm at a time. Owns the single
/// `RelationalStore` it runs on; it never opens a second connection.
#[derive(Debug)]
pub struct ForecastStore {
    store: RelationalStore,
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

impl ForecastStore {
    pub fn connect(credentials: Credentials, logger: Arc<dyn Logger>) -> Self {
        Self::from_store(RelationalStore::connect(credentials, logger))
    }

    pub fn from_store(store: RelationalStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RelationalStore {
        &self.store
    }

    /// The forecast row of `farm_id`, or `Ok(None)` when there is none.
    pub fn fetch_forecast_by_farm(&self, farm_id: &str) -> StoreResult<Option<ResultRow>> {
        self.store.fetch_one(
            "SELECT * FROM weather_forecast WHERE farm_id = ?1",
            &[text(farm_id)],
        )
    }

    /// The raw `data` payload of the farm's forecast.
    ///
    /// A row whose `data` is not text is an error, not a missing forecast.
    pub fn forecast_payload(&self, farm_id: &str) -> StoreResult<Option<String>> {
        let Some(row) = self.fetch_forecast_by_farm(farm_id)? else {
            return Ok(None);
        };

        if let Some(data) = row.get_text("data") {
            return Ok(Some(data.to_string()));
        }

        let db = self.store.database_name();
        let found = match row.get("data") {
            Some(Value::Null) | None => "null",
            Some(Value::Integer(_)) => "integer",
            Some(Value::Real(_)) => "real",
            Some(Value::Blob(_)) => "blob",
            Some(Value::Text(_)) => "text",
        };
        let logger = self.store.logger();
        logger.error(&format!(
            "Exception: [{db}] forecast of farm {farm_id} has no text payload."
        ));
        logger.debug(&format!(
            "Exception: [{db}] data column of farm {farm_id} holds {found}."
        ));

        Err(StoreError::InvalidData {
            database: db.to_string(),
            message: format!("forecast data of farm {farm_id} is {found}, not text"),
        })
    }

    pub fn list_farms(&self) -> StoreResult<Vec<String>> {
        let rows = self.store.fetch_all(
            "SELECT DISTINCT farm_id FROM weather_forecast ORDER BY farm_id ASC",
            &[],
        )?;

        Ok(rows
            .iter()
            .filter_map(|row| row.get_text("farm_id").map(String::from))
            .collect())
    }

    pub fn save_forecast(&self, farm_id: &str, data: &str) -> StoreResult<usize> {
        self.store.insert_one(
            "INSERT INTO weather_forecast (farm_id, data, created_at) VALUES (?1, ?2, ?3)",
            &[text(farm_id), text(data), text(&Local::now().to_rfc3339())],
        )
    }

    pub fn replace_forecast(&self, farm_id: &str, data: &str) -> StoreResult<usize> {
        self.store.update(
            "UPDATE weather_forecast SET data = ?2, created_at = ?3 WHERE farm_id = ?1",
            &[text(farm_id), text(data), text(&Local::now().to_rfc3339())],
        )
    }

    /// Update the farm's forecast, or insert it when the farm has none yet.
    pub fn upsert_forecast(&self, farm_id: &str, data: &str) -> StoreResult<usize> {
        match self.replace_forecast(farm_id, data)? {
            0 => self.save_forecast(farm_id, data),
            n => Ok(n),
        }
    }

    pub fn purge_farm(&self, farm_id: &str) -> bool {
        self.store.delete_rows(
            "DELETE FROM weather_forecast WHERE farm_id = ?1",
            &[text(farm_id)],
        )
    }

    pub fn close(&mut self) {
        self.store.close();
    }
}
