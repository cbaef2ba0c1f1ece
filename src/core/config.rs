use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// strftime patterns for every display string the store emits. Swapping
/// these is the locale/format hook; outputs are consumed verbatim by the
/// `date`, `time`, and `last_message_time` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Message `time` and session `last_message_time` rendering.
    pub time_format: String,
    /// Session `date` rendering.
    pub date_format: String,
    /// Calendar-date key for history grouping.
    pub group_date_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".into(),
            date_format: "%m/%d %H:%M".into(),
            group_date_format: "%B %-d, %Y".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub formats: FormatConfig,
    /// Initial sidebar visibility.
    pub show_sidebar: bool,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            formats: FormatConfig::default(),
            show_sidebar: true,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Default config file location under the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("parlor").join("config.json"))
    }

    /// Loads from `path`, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::File(e.to_string())),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::File(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ConfigError::File(e.to_string()))
    }
}
