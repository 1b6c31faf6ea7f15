use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::{AppConfig, RawConfig};

const CONFIG_PATH_ENV: &str = "HEXMAN_CONFIG";
const LAYOUT_ENV: &str = "HEXMAN_LAYOUT";

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    /// Build a config load result from explicit parts.
    pub(crate) fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the start-up config, falling back to defaults on any problem.
pub(crate) fn load_app_config() -> AppConfig {
    let path = config_path();
    let config = match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!("no config at {}", path.display());
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("config file invalid: {message}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config read failed for {}: {err}", path.display());
            AppConfig::default()
        },
    };

    let layout = std::env::var(LAYOUT_ENV).ok();
    config.with_layout_override(layout.as_deref())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let raw = match serde_json::from_str::<RawConfig>(&data) {
        Ok(raw) => raw,
        Err(err) => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        AppConfig::from_raw(raw),
        ConfigLoadStatus::Loaded,
    ))
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("hexman")
            .join("config.json");
    }

    std::env::temp_dir().join("hexman").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{AppConfig, ConfigLoadStatus, load_config_from_path};
    use crate::widgets::color_list::model::Layout;

    #[test]
    fn given_valid_config_when_load_then_fields_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("config.json");
        fs::write(&path, r#"{ "layout": "table", "grid_columns": 3 }"#)
            .expect("config payload should be written");

        let loaded =
            load_config_from_path(&path).expect("config should load");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.layout(), Layout::Table);
        assert_eq!(config.grid_columns(), 3);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status()
    {
        let root = test_temp_dir("missing");
        let path = root.join("config.json");

        let loaded = load_config_from_path(&path)
            .expect("missing config should not be an error");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, AppConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, AppConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "hexman-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
