//! Application configuration.

use crate::weather::{DEFAULT_LOCATION, Location};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the directory under `$HOME` holding the config file.
const CONFIG_DIR: &str = ".pulse-dashboard";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location the Weather panel selects first.
    pub default_location: String,
    /// Whether to paint a solid background behind the dashboard.
    #[serde(default)]
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_location: DEFAULT_LOCATION.name.to_string(),
            with_background_color: false,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists and parses, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        Config::load_from_file(path).unwrap_or_default()
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// The configured default location, or the built-in default when the
    /// stored name is not one of the known locations.
    pub fn location(&self) -> Location {
        self.default_location
            .parse::<Location>()
            .unwrap_or(DEFAULT_LOCATION)
    }
}

/// Path of the configuration file, `~/.pulse-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join("config.json"))
}
