use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TillyError};
use crate::store::DEFAULT_MIN_DAY_ROWS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    /// A day's editing view is padded with placeholder rows up to this count.
    #[serde(default = "default_min_day_rows")]
    pub min_day_rows: usize,
    /// Show the derived Esperado column in the day view.
    #[serde(default = "default_show_expected")]
    pub show_expected: bool,
}

fn default_min_day_rows() -> usize {
    DEFAULT_MIN_DAY_ROWS
}

fn default_show_expected() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            min_day_rows: default_min_day_rows(),
            show_expected: default_show_expected(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tilly")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("tilly")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TillyError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn get_data_dir() -> PathBuf {
    PathBuf::from(&load_settings().data_dir)
}

pub fn ledger_path() -> PathBuf {
    get_data_dir().join("ledger.csv")
}
