use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Reference zone for display, day boundaries and corrections.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Calendar window: today minus this many days, in the reference zone.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "US/Pacific".to_string()
}
fn default_lookback_days() -> u32 {
    1
}
fn default_report_file() -> String {
    "report.pdf".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            timezone: default_timezone(),
            lookback_days: default_lookback_days(),
            report_file: default_report_file(),
        }
    }
}

impl Config {
    /// Platform config directory (`~/.config/babylog` on Linux), or `~/.babylog`.
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("babylog"),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".babylog"),
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("babylog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("baby_log.db")
    }

    /// Load the configuration file, or defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Resolve the configured reference zone.
    pub fn zone(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown time zone '{}'", self.timezone)))
    }
}
