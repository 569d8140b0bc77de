pub mod credentials;
pub mod forecast;
pub mod initialize;
pub mod row;
pub mod store;

pub use credentials::Credentials;
pub use forecast::ForecastStore;
pub use row::ResultRow;
pub use store::{RelationalStore, StoreError, StoreResult};
