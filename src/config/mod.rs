use crate::errors::{AppError, AppResult};
use crate::extract::Thresholds;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Economy pre-filled by `scan` when no reading is recognized (km/L)
    #[serde(default = "default_economy")]
    pub default_economy: f64,
    /// Odometer pre-filled by `scan` when no reading is recognized (km)
    #[serde(default = "default_odometer")]
    pub default_odometer: u64,
    #[serde(default = "default_economy_ceiling")]
    pub economy_ceiling: f64,
    #[serde(default = "default_odometer_floor")]
    pub odometer_floor: u64,
    #[serde(default)]
    pub min_confidence: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_dir() -> String {
    Config::config_dir().join("data").to_string_lossy().to_string()
}
fn default_economy() -> f64 {
    15.5
}
fn default_odometer() -> u64 {
    1250
}
fn default_economy_ceiling() -> f64 {
    50.0
}
fn default_odometer_floor() -> u64 {
    100
}
fn default_currency() -> String {
    "THB".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_economy: default_economy(),
            default_odometer: default_odometer(),
            economy_ceiling: default_economy_ceiling(),
            odometer_floor: default_odometer_floor(),
            min_confidence: None,
            currency: default_currency(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fuellog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fuellog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fuellog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "unreadable configuration file");
            AppError::ConfigLoad
        })
    }

    /// Data directory with a leading `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        if let Some(rest) = self.data_dir.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        PathBuf::from(&self.data_dir)
    }

    /// Extractor bounds configured for `scan`.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            economy_ceiling: self.economy_ceiling,
            odometer_floor: self.odometer_floor,
            min_confidence: self.min_confidence,
        }
    }

    /// Initialize configuration file and data directory.
    ///
    /// `custom_dir` (from `--data-dir`) replaces the default data directory;
    /// in test mode the config file is left untouched.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_dir {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("data"),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
            crate::ui::messages::success(format!("Config file: {}", Self::config_file().display()));
        }

        fs::create_dir_all(&data_dir)?;
        crate::ui::messages::success(format!("Data dir:    {}", data_dir.display()));

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
