pub mod config;
pub mod farms;
pub mod forecast;
pub mod import;
pub mod indoor;
pub mod init;
pub mod purge;

use crate::config::Config;
use crate::db::forecast::ForecastStore;
use crate::errors::{AppError, AppResult};
use crate::logging::TracingLogger;
use std::sync::Arc;

/// Open the forecast store described by the configuration.
pub(crate) fn open_store(cfg: &Config) -> ForecastStore {
    let logger = Arc::new(TracingLogger::new("ForecastStore"));
    ForecastStore::connect(cfg.credentials(), logger)
}

/// `--farm`, or the configured default.
pub(crate) fn resolve_farm(farm: &Option<String>, cfg: &Config) -> AppResult<String> {
    farm.clone()
        .or_else(|| cfg.default_farm.clone())
        .filter(|f| !f.trim().is_empty())
        .ok_or(AppError::MissingFarm)
}
