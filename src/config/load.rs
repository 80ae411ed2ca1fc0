//! Config loading for perch.
//!
//! Handles loading and deserializing settings from `perch.toml`.
//! Provides the main [Config] struct as well as the internal [RawConfig]
//! used for parsing. A missing config file is normal and falls back to the
//! built-in defaults; a malformed one is reported once on stderr.

use crate::config::{General, Keys, Settings};

use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Raw configuration as read from the toml file, converted into the main
/// [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    keys: Keys,
}

/// Processed configuration: default settings plus key bindings.
#[derive(Debug)]
pub struct Config {
    settings: Settings,
    keys: Keys,
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            settings: Settings::from(raw.general),
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Loads the configuration from the default path, falling back to the
    /// built-in defaults when the file is absent or malformed.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    // Accessors

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the configuration file path.
    /// Checks the PERCH_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then ~/.config/perch/perch.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("PERCH_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("perch/perch.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/perch/perch.toml");
        }
        PathBuf::from("perch.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortMode;

    #[test]
    fn parses_general_and_keys_tables() -> Result<(), Box<dyn std::error::Error>> {
        let toml_content = r#"
            [general]
            show_hidden = true
            sort = "time"

            [keys]
            quit = ["x"]
        "#;

        let raw: RawConfig = toml::from_str(toml_content)?;
        let config = Config::from(raw);

        assert!(config.settings().show_hidden());
        assert_eq!(config.settings().sort(), SortMode::Time);
        assert_eq!(config.keys().quit(), ["x".to_string()]);
        // untouched tables keep their defaults
        assert_eq!(config.keys().help(), ["?".to_string()]);
        Ok(())
    }

    #[test]
    fn empty_config_is_all_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str("")?;
        let config = Config::from(raw);
        assert!(!config.settings().show_hidden());
        assert_eq!(config.settings().sort(), SortMode::Name);
        Ok(())
    }
}
