use crate::errors::{AppError, AppResult};
use crate::store::{DEFAULT_SESSION_NAME_FORMAT, DEFAULT_STORAGE_KEY};
use crate::utils::date::is_valid_format;
use crate::utils::path::resolve_under;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_session_name_format")]
    pub session_name_format: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_session_name_format() -> String {
    DEFAULT_SESSION_NAME_FORMAT.to_string()
}
fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            session_name_format: default_session_name_format(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.sessiondraft`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sessiondraft")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sessiondraft.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sessiondraft.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("'storage_key' must not be empty".into()));
        }
        if !is_valid_format(&self.session_name_format) {
            return Err(AppError::Config(format!(
                "'session_name_format' is not a valid strftime pattern: {}",
                self.session_name_format
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config(
                "'tick_interval_ms' must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the configuration written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => resolve_under(&dir, &name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
