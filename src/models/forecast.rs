use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastTime {
    /// ISO-8601 end of the forecast window, UTC.
    pub end: String,
}

/// One sample of the upstream forecast payload.
///
/// Field names follow the upstream JSON, including its `tempture` spelling.
/// Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub forecast_time: ForecastTime,
    #[serde(rename = "tempture")]
    pub temperature: f64,
    #[serde(rename = "rh")]
    pub humidity: f64,
}

impl ForecastSample {
    pub fn new(end: &str, temperature: f64, humidity: f64) -> Self {
        Self {
            forecast_time: ForecastTime {
                end: end.to_string(),
            },
            temperature,
            humidity,
        }
    }

    pub fn end(&self) -> &str {
        &self.forecast_time.end
    }
}
