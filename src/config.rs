// bmark/src/config.rs
use crate::domain::error::DomainResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Directory holding the persisted bookmark, category and theme slots
    #[serde(default = "default_store_dir")]
    pub store_dir: String,
}

fn default_store_dir() -> String {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/bmark/store");

    dir.to_str().unwrap_or("./store").to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
        }
    }
}

// Load settings from config files and environment variables
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    // Explicit config file wins over the standard location
    let config_sources = [
        config_file.map(Path::to_path_buf),
        dirs::home_dir().map(|p| p.join(".config/bmark/config.toml")),
    ];

    for config_path in config_sources.iter().flatten() {
        if config_path.exists() {
            trace!("Loading config from: {:?}", config_path);

            if let Ok(config_text) = std::fs::read_to_string(config_path) {
                if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                    settings.store_dir = file_settings.store_dir;
                    break;
                }
            }
        }
    }

    // Override with environment variables
    if let Ok(store_dir) = std::env::var("BMARK_STORE_DIR") {
        trace!("Using BMARK_STORE_DIR from environment: {}", store_dir);
        settings.store_dir = store_dir;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn given_env_override_when_load_settings_then_store_dir_from_env() {
        env::set_var("BMARK_STORE_DIR", "/tmp/bmark-test-store");

        let settings = load_settings(None).unwrap();
        assert_eq!(settings.store_dir, "/tmp/bmark-test-store");

        env::remove_var("BMARK_STORE_DIR");
    }

    #[test]
    #[serial]
    fn given_config_file_when_load_settings_then_store_dir_from_file() {
        env::remove_var("BMARK_STORE_DIR");
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "store_dir = \"/tmp/from-file\"\n").unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();
        assert_eq!(settings.store_dir, "/tmp/from-file");
    }

    #[test]
    #[serial]
    fn given_no_sources_when_load_settings_then_defaults_used() {
        env::remove_var("BMARK_STORE_DIR");

        let settings = load_settings(None).unwrap();
        assert!(settings.store_dir.ends_with("store") || !settings.store_dir.is_empty());
    }

    #[test]
    fn given_default_settings_when_generate_config_then_contains_store_dir() {
        let config = generate_default_config();
        assert!(config.contains("store_dir"));
    }
}
