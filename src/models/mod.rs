pub mod forecast;
pub mod indoor;

pub use forecast::{ForecastSample, ForecastTime};
pub use indoor::{IndoorTempRecord, IndoorTempReport};
