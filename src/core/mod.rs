pub mod config;
pub mod forecast;
pub mod indoor;
