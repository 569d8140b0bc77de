use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;

/// Create the database file (and its directory) if needed, then the schema.
pub fn init_db(db_path: &str) -> AppResult<()> {
    let path = expand_tilde(db_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&path)?;
    create_schema(&conn)?;
    Ok(())
}

/// `data` holds the forecast payload exactly as the upstream crawler wrote it.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS weather_forecast (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            farm_id     TEXT NOT NULL,
            data        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_weather_forecast_farm
            ON weather_forecast (farm_id);
        "#,
    )?;
    Ok(())
}
