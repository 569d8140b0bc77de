use crate::db::credentials::{Credentials, DEFAULT_PORT};
use crate::errors::{AppError, AppResult};
use crate::logging::LogLevel;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Relational store connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub timeout_secs: u64,
}

impl Default for RdbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
            database: Config::database_file().to_string_lossy().to_string(),
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub root_path: String,
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            root_path: Config::config_dir()
                .join("logs")
                .to_string_lossy()
                .to_string(),
            level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    pub fn root(&self) -> PathBuf {
        expand_tilde(&self.root_path)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rdb: RdbConfig,
    pub log: LogConfig,
    pub default_farm: Option<String>,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".agriweather")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("agriweather.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("agriweather.sqlite")
    }

    /// Load the configuration at `path`, or the defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            &self.rdb.host,
            self.rdb.port,
            &self.rdb.username,
            &self.rdb.password,
            &self.rdb.database,
        )
        .with_timeout(Duration::from_secs(self.rdb.timeout_secs))
    }

    /// Copy safe to print: the password is masked.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.rdb.password.is_empty() {
            cfg.rdb.password = "***".to_string();
        }
        cfg
    }

    /// Write the configuration file (unless `is_test`) and return the
    /// configuration `init` should use.
    pub fn init_all(
        config_path: &Path,
        custom_db: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let mut cfg = Self::load_from(config_path)?;

        if let Some(db) = custom_db {
            cfg.rdb.database = db;
        }

        if !is_test {
            cfg.save_to(config_path)?;
            println!("✅ Config file: {:?}", config_path);
        }

        Ok(cfg)
    }
}
