use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Looked up inside the application's files directory.
pub const CONFIG_FILE: &str = "display.toml";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Every group carries `#[serde(default)]`, so a broken `[sentry]` group cannot take the
    /// `[logging]` settings down with it.
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub sentry: SentryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    if cfg!(debug_assertions) {
        "trace".to_string()
    } else {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to the build default.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .trim()
            .parse()
            .or_else(|_| default_level().parse())
            .unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct SentryConfig {
    /// Sentry stays off without a DSN.
    #[serde(default)]
    pub dsn: Option<String>,
}

impl SentryConfig {
    pub fn dsn(&self) -> Option<&str> {
        self.dsn.as_deref().map(str::trim).filter(|dsn| !dsn.is_empty())
    }
}

pub fn save_config(config: &DisplayConfig, config_path: &Path) {
    // Keep a copy of whatever was there, the user may want to fix it by hand
    if config_path.exists() {
        let backup_path = config_path.with_extension("bak");
        if let Err(err) = fs::rename(config_path, &backup_path) {
            log::warn!("Failed to create backup of existing config: {}", err);
        }
    }

    if let Some(config_dir) = config_path.parent() {
        if let Err(err) = fs::create_dir_all(config_dir) {
            log::warn!("Failed to create config directory: {}", err);
            return;
        }
    }

    match toml::to_string(config) {
        Ok(content) => {
            if let Err(err) = fs::write(config_path, content) {
                log::warn!("Failed to write config file: {}", err);
            }
        }
        Err(err) => log::warn!("Failed to serialize config: {}", err),
    }
}

pub fn parse_config(config_path: &Path) -> DisplayConfig {
    let Ok(content) = fs::read_to_string(config_path) else {
        // First launch, give the user a file to edit
        let default_config = DisplayConfig::default();
        save_config(&default_config, config_path);
        return default_config;
    };

    match toml::from_str::<DisplayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            // Config malformed, giving back the default config so that the user can modify it again
            log::warn!("Malformed {}, using defaults: {}", CONFIG_FILE, err);
            let default_config = DisplayConfig::default();
            save_config(&default_config, config_path);
            default_config
        }
    }
}
