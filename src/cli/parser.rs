use clap::{Parser, Subcommand};

/// Command-line interface definition for agriweather
/// Reads weather forecasts from the relational store and derives indoor temperatures
#[derive(Parser)]
#[command(
    name = "agriweather",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive indoor-temperature estimates from stored weather forecasts",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the forecast schema
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// List farms that have a stored forecast
    Farms,

    /// Print the raw forecast row of a farm
    Forecast {
        #[arg(long = "farm", help = "Farm identifier (default: default_farm)")]
        farm: Option<String>,
    },

    /// Store a forecast payload file for a farm
    Import {
        #[arg(long = "farm", help = "Farm identifier (default: default_farm)")]
        farm: Option<String>,

        #[arg(long, value_name = "FILE", help = "File holding the raw payload")]
        file: String,
    },

    /// Delete the stored forecast of a farm
    Purge {
        #[arg(long = "farm", help = "Farm identifier (default: default_farm)")]
        farm: Option<String>,
    },

    /// Derive indoor temperatures from a farm's forecast
    Indoor {
        #[arg(long = "farm", help = "Farm identifier (default: default_farm)")]
        farm: Option<String>,
    },
}
