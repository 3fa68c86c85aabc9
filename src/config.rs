use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub nav: NavConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    /// Initial window width (in pixels)
    pub width: f32,
    /// Initial window height (in pixels)
    pub height: f32,
}

/// Navigation configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NavConfig {
    /// Path the app opens on, e.g. "/" or "/jobs"
    pub start_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "light".to_string(),
            },
            window: WindowConfig {
                width: 1200.0,
                height: 800.0,
            },
            nav: NavConfig {
                start_path: "/".to_string(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "worknet") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse config file, using defaults: {}", e);
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read config file, using defaults: {}", e);
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().ok_or_else(|| anyhow!("could not determine config directory"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("creating config directory")?;
        }
        let contents = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(&path, contents).context("writing config file")?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.window.width, 1200.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.nav.start_path, "/");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.nav.start_path, deserialized.nav.start_path);
    }
}
