// Configuration loaded from a YAML file

use crate::error::{Result, TaskError};
use crate::store::DEFAULT_SLOT_KEY;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `.tasklist` store
    pub store_path: Option<PathBuf>,
    /// Slot key the collection is stored under
    pub slot_key: String,
    /// chrono format string for due dates
    pub date_format: String,
    /// Add the example tasks when the store is empty at startup
    pub seed_when_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            seed_when_empty: false,
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location when `None`
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(file = ?path, "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        validate_date_format(&config.date_format)?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/tasklist/config.yaml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tasklist").join("config.yaml"))
    }

    /// Directory the store opens under
    pub fn store_dir(&self) -> PathBuf {
        self.store_path
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("tasklist")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Reject format strings containing specifiers chrono does not know
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TaskError::InvalidDateFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}
