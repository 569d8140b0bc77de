#![allow(dead_code)]
use agriweather::db::initialize::init_db;
use agriweather::db::{Credentials, ForecastStore, RelationalStore};
use agriweather::logging::MemoryLogger;
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub fn agw() -> Command {
    cargo_bin_cmd!("agriweather")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agriweather.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database file with the forecast schema
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path).expect("init db");
    db_path
}

/// Temporary file path inside tempdir, removed if present
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agriweather.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Log root used by `write_test_config(name, ..)`
pub fn test_log_root(name: &str) -> PathBuf {
    env::temp_dir().join(format!("{}_agriweather_logs", name))
}

/// Config file whose logs go to the temp dir instead of $HOME
pub fn write_test_config(name: &str, extra: &str) -> String {
    let path = temp_file(name, "conf");
    let log_root = test_log_root(name);
    let content = format!(
        "log:\n  root_path: {}\n  level: DEBUG\n{}",
        log_root.to_string_lossy(),
        extra
    );
    fs::write(&path, content).expect("write config");
    path
}

pub fn open_store(db_path: &str) -> (RelationalStore, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let store = RelationalStore::connect(Credentials::local(db_path), logger.clone());
    (store, logger)
}

pub fn open_forecast_store(db_path: &str) -> (ForecastStore, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let store = ForecastStore::connect(Credentials::local(db_path), logger.clone());
    (store, logger)
}

/// One sample in the upstream JSON shape
pub fn sample(end: &str, tempture: f64, rh: f64) -> serde_json::Value {
    json!({ "forecast_time": { "end": end }, "tempture": tempture, "rh": rh })
}

/// Encode the list twice, as the upstream store does
pub fn double_encode(samples: &[serde_json::Value]) -> String {
    let inner = serde_json::to_string(samples).expect("encode samples");
    serde_json::to_string(&inner).expect("encode payload")
}
