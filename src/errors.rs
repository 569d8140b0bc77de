//! Unified application error type.
//! The store layer recovers its own failures (logged, returned as
//! `StoreError`); everything that reaches `run()` is folded into `AppError`.

use std::io;
use thiserror::Error;

use crate::core::indoor::DerivationError;
use crate::db::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("No forecast found for farm {0}")]
    NoForecast(String),

    #[error("Failed to delete the forecast of farm {0}")]
    PurgeFailed(String),

    #[error("No farm given: pass --farm or set default_farm in the configuration")]
    MissingFarm,

    // ---------------------------
    // Derivation
    // ---------------------------
    #[error("Derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type AppResult<T> = Result<T, AppError>;
