use crate::errors::{AppError, AppResult};
use crate::utils::date::WeekStart;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the store files (one JSON document per key).
    pub data_dir: String,
    /// Calendar-week anchor used by the 4-week trend buckets.
    #[serde(default)]
    pub week_start: WeekStart,
    /// Display label for weights.
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

fn default_weight_unit() -> String {
    "kg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_path().to_string_lossy().to_string(),
            week_start: WeekStart::default(),
            weight_unit: default_weight_unit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfitlogger")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rfitlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfitlogger.conf")
    }

    /// Default location of the data directory
    pub fn data_dir_path() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A config file that exists but does not parse is a real error: the
    /// user asked for specific settings and silently ignoring them would
    /// change behavior without warning.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Initialize the configuration file and data directory.
    pub fn init_all() -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        let config = Self::default();
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("serialize config: {e}")))?;
        fs::write(Self::config_file(), yaml)?;
        fs::create_dir_all(config.data_dir_buf())?;

        crate::ui::messages::success(format!("Config file: {:?}", Self::config_file()));
        crate::ui::messages::success(format!("Data dir:    {:?}", config.data_dir));
        Ok(())
    }

    pub fn data_dir_buf(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
