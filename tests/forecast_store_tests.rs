use agriweather::core::forecast::ForecastLogic;
use agriweather::core::indoor::derive;
use agriweather::db::StoreError;
use agriweather::errors::AppError;
use agriweather::logging::LogLevel;
use rusqlite::types::Value;

mod common;
use common::{double_encode, init_test_db, open_forecast_store, sample, setup_test_db};

const FARM: &str = "09f9b7dd-8b00-42f8-a5c8-72c37adfd5d8";

#[test]
fn test_empty_table_has_no_forecast() {
    let db_path = init_test_db("forecast_empty");
    let (store, logger) = open_forecast_store(&db_path);

    assert_eq!(store.fetch_forecast_by_farm(FARM), Ok(None));
    assert_eq!(store.forecast_payload(FARM), Ok(None));
    assert_eq!(logger.count(LogLevel::Error), 0);

    // absent forecast stops before derivation
    match ForecastLogic::indoor(&store, FARM) {
        Err(AppError::NoForecast(farm)) => assert_eq!(farm, FARM),
        other => panic!("expected NoForecast, got {:?}", other),
    }
}

#[test]
fn test_saved_forecast_is_fetched_by_farm() {
    let db_path = init_test_db("forecast_save_fetch");
    let (store, _logger) = open_forecast_store(&db_path);
    let payload = double_encode(&[sample("2024-01-01T00:00:00+00:00", 25.0, 60.0)]);

    assert_eq!(store.save_forecast(FARM, &payload), Ok(1));
    assert_eq!(store.save_forecast("other-farm", "\"[]\""), Ok(1));

    let row = store.fetch_forecast_by_farm(FARM).unwrap().expect("row");
    assert_eq!(row.get_text("farm_id"), Some(FARM));
    assert_eq!(row.get_text("data"), Some(payload.as_str()));

    let fetched = store.forecast_payload(FARM).unwrap().expect("payload");
    let report = derive(&fetched).unwrap();
    assert_eq!(report.len(), 1);
}

#[test]
fn test_farm_id_is_bound_not_interpolated() {
    let db_path = init_test_db("forecast_injection");
    let (store, logger) = open_forecast_store(&db_path);
    store.save_forecast(FARM, "\"[]\"").unwrap();

    let hostile = "x' OR '1'='1";
    assert_eq!(store.fetch_forecast_by_farm(hostile), Ok(None));
    assert_eq!(logger.count(LogLevel::Error), 0);
}

#[test]
fn test_list_farms_is_distinct_and_sorted() {
    let db_path = init_test_db("forecast_list_farms");
    let (store, _logger) = open_forecast_store(&db_path);

    for farm in ["farm-c", "farm-a", "farm-c", "farm-b"] {
        store.save_forecast(farm, "\"[]\"").unwrap();
    }

    assert_eq!(
        store.list_farms().unwrap(),
        vec!["farm-a".to_string(), "farm-b".to_string(), "farm-c".to_string()]
    );
}

#[test]
fn test_upsert_replaces_existing_forecast() {
    let db_path = init_test_db("forecast_upsert");
    let (store, _logger) = open_forecast_store(&db_path);

    assert_eq!(store.upsert_forecast(FARM, "\"[1]\""), Ok(1));
    assert_eq!(store.upsert_forecast(FARM, "\"[2]\""), Ok(1));

    let rows = store
        .store()
        .fetch_all("SELECT data FROM weather_forecast", &[])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_text("data"), Some("\"[2]\""));
}

#[test]
fn test_purge_farm_removes_only_that_farm() {
    let db_path = init_test_db("forecast_purge");
    let (store, _logger) = open_forecast_store(&db_path);
    store.save_forecast(FARM, "\"[]\"").unwrap();
    store.save_forecast("farm-keep", "\"[]\"").unwrap();

    assert!(store.purge_farm(FARM));
    assert_eq!(store.fetch_forecast_by_farm(FARM), Ok(None));
    assert!(store.fetch_forecast_by_farm("farm-keep").unwrap().is_some());
}

#[test]
fn test_missing_database_reports_store_failure() {
    let db_path = setup_test_db("forecast_missing_db");
    let (store, logger) = open_forecast_store(&db_path);

    assert!(!store.store().is_connected());
    assert!(store.fetch_forecast_by_farm(FARM).is_err());
    assert!(!store.purge_farm(FARM));

    // connect + two failed calls
    assert_eq!(logger.count(LogLevel::Error), 3);

    match ForecastLogic::indoor(&store, FARM) {
        Err(AppError::Store(_)) => {}
        other => panic!("expected a store error, got {:?}", other),
    }
}

#[test]
fn test_non_text_payload_is_an_error_not_absent() {
    let db_path = init_test_db("forecast_blob_payload");
    let (store, logger) = open_forecast_store(&db_path);

    // a BLOB keeps its storage class in a TEXT column
    store
        .store()
        .insert_one(
            "INSERT INTO weather_forecast (farm_id, data, created_at) VALUES (?1, ?2, ?3)",
            &[
                Value::Text(FARM.to_string()),
                Value::Blob(vec![0x22, 0x5b, 0x5d, 0x22]),
                Value::Text("2024-01-01T00:00:00+08:00".to_string()),
            ],
        )
        .unwrap();

    match store.forecast_payload(FARM) {
        Err(StoreError::InvalidData { message, .. }) => {
            assert!(message.contains(FARM));
            assert!(message.contains("blob"));
        }
        other => panic!("expected InvalidData, got {:?}", other),
    }
    assert_eq!(logger.count(LogLevel::Error), 1);
    assert_eq!(logger.count(LogLevel::Debug), 1);

    match ForecastLogic::indoor(&store, FARM) {
        Err(AppError::Store(StoreError::InvalidData { .. })) => {}
        other => panic!("expected a store error, got {:?}", other),
    }
}

#[test]
fn test_closed_forecast_store_is_disconnected() {
    let db_path = init_test_db("forecast_closed");
    let (mut store, _logger) = open_forecast_store(&db_path);
    store.save_forecast(FARM, "\"[]\"").unwrap();

    store.close();
    assert!(!store.store().is_connected());
    assert!(matches!(
        store.forecast_payload(FARM),
        Err(StoreError::Disconnected(_))
    ));
}
