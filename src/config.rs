use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default seed catalog, matching the two activities every session starts with.
pub const DEFAULT_ACTIVITIES: [&str; 2] = ["Commute", "Work"];

/// Default trailing-edge debounce for the filter field, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Activities seeded into the board at startup.
    pub activities: Vec<String>,
    /// Filter debounce window in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activities: DEFAULT_ACTIVITIES.iter().map(|s| s.to_string()).collect(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "yourname", "doing")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    ///
    /// Activities added inside the UI are session-only and never written
    /// back; this file is startup configuration.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let config_data = fs::read_to_string(&config_path)
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: Config = serde_json::from_str(&config_data)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
        }

        let config_data = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(&config_path, config_data)
            .map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn setup_test_env() -> TempDir {
        let temp_dir = TempDir::new().unwrap();

        if cfg!(target_os = "windows") {
            env::set_var("APPDATA", temp_dir.path());
        } else {
            env::set_var("HOME", temp_dir.path());
        }

        temp_dir
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.activities, vec!["Commute", "Work"]);
        assert_eq!(config.debounce_ms, 250);
    }

    // Single test so the HOME override is not racing a sibling test.
    #[test]
    fn test_save_and_load_roundtrip() {
        let _temp = setup_test_env();

        // No file yet: defaults.
        let loaded = Config::load_or_default().unwrap();
        assert_eq!(loaded.activities, vec!["Commute", "Work"]);

        let config = Config {
            activities: vec!["Gym".to_string(), "Read".to_string()],
            debounce_ms: 100,
        };
        config.save().unwrap();

        let loaded = Config::load_or_default().unwrap();
        assert_eq!(loaded.activities, vec!["Gym", "Read"]);
        assert_eq!(loaded.debounce_ms, 100);
    }
}
