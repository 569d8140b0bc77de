//! Indoor-temperature derivation from a raw forecast payload.
//!
//! The upstream store keeps the forecast list JSON-encoded twice: the text in
//! the `data` column is a quoted JSON string whose inner quotes are escaped
//! with backslashes. [`decode_payload`] decodes that outer string once, which
//! leaves escapes belonging to the inner JSON intact.
//!
//! Any bad sample fails the whole derivation; there is no partial output.

use crate::models::{ForecastSample, IndoorTempRecord, IndoorTempReport};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use thiserror::Error;

/// Asia/Taipei, UTC+8 all year.
pub const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum DerivationError {
    #[error("payload is not a quoted JSON string: {0}")]
    NotQuoted(String),

    #[error("malformed forecast payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("unparsable forecast timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("cannot convert {0} to local time")]
    LocalTime(String),
}

fn preview(s: &str) -> String {
    const MAX: usize = 40;
    if s.chars().count() <= MAX {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(MAX).collect::<String>())
    }
}

/// Decode the outer JSON string, then parse the forecast list it holds.
pub fn decode_payload(raw: &str) -> Result<Vec<ForecastSample>, DerivationError> {
    let trimmed = raw.trim();
    if trimmed.len() < 2 || !trimmed.starts_with('"') || !trimmed.ends_with('"') {
        return Err(DerivationError::NotQuoted(preview(trimmed)));
    }

    let inner: String = serde_json::from_str(trimmed)?;
    Ok(serde_json::from_str(&inner)?)
}

/// RFC 3339 with an offset, or a naive ISO-8601 timestamp read as UTC.
pub fn parse_utc(ts: &str) -> Result<DateTime<Utc>, DerivationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DerivationError::InvalidTimestamp(ts.to_string()))
}

pub fn to_taipei(utc: DateTime<Utc>) -> Result<DateTime<FixedOffset>, DerivationError> {
    let offset = FixedOffset::east_opt(TAIPEI_OFFSET_SECS)
        .ok_or_else(|| DerivationError::LocalTime(utc.to_rfc3339()))?;
    Ok(utc.with_timezone(&offset))
}

/// Empirical diurnal model. The hour enters only through the sine phase,
/// which is zero at 06:00.
pub fn indoor_temperature(temperature: f64, humidity: f64, hour: u32) -> f64 {
    let phase = (hour as f64 * 15.0 - 90.0).to_radians().sin();
    4.1218 + 0.9986 * temperature - 0.03417 * humidity + 2.36591 * phase
}

pub fn derive_sample(sample: &ForecastSample) -> Result<IndoorTempRecord, DerivationError> {
    let local = to_taipei(parse_utc(sample.end())?)?;
    let hour = local.hour();

    Ok(IndoorTempRecord {
        local_time: local.format(LOCAL_TIME_FORMAT).to_string(),
        hour,
        temperature: sample.temperature,
        humidity: sample.humidity,
        indoor_temperature: indoor_temperature(sample.temperature, sample.humidity, hour),
    })
}

/// Decode `raw` and derive one record per sample, keyed by the sample's
/// original end-timestamp.
pub fn derive(raw: &str) -> Result<IndoorTempReport, DerivationError> {
    let samples = decode_payload(raw)?;

    let mut report = IndoorTempReport::with_capacity(samples.len());
    for sample in &samples {
        let record = derive_sample(sample)?;
        report.insert(sample.end().to_string(), record);
    }

    Ok(report)
}
