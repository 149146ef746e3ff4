use crate::constants::{LOG_FILE_NAME, env};
use crate::error::AppError;
use crate::tables::{DEFAULT_BLACKLIST, DEFAULT_WHITELIST, NameTables};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Holds the curated name tables and logging settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Names never chosen by the heuristics. Defaults to the built-in blacklist.
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
    /// Manual final decisions, one list of names per codepoint. Defaults to the built-in whitelist.
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<Vec<String>>,
}

fn default_blacklist() -> Vec<String> {
    DEFAULT_BLACKLIST.iter().map(|name| name.to_string()).collect()
}

fn default_whitelist() -> Vec<Vec<String>> {
    DEFAULT_WHITELIST
        .iter()
        .map(|entry| entry.iter().map(|name| name.to_string()).collect())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            blacklist: default_blacklist(),
            whitelist: default_whitelist(),
        }
    }
}

impl Config {
    /// Loads configuration from `custom_path`, or from the default config file location.
    /// A missing default file yields the built-in tables; a missing custom file is an error.
    ///
    /// # Environment Variables
    /// - `EMOJI_NAMES_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load(custom_path: Option<&str>) -> Result<Self, AppError> {
        let mut config = match custom_path {
            Some(path) => Config::load_from_path(path).await?,
            None => {
                let config_path = get_config_path();
                if Path::new(&config_path).exists() {
                    Config::load_from_path(&config_path).await?
                } else {
                    tracing::debug!("No config file at {config_path}, using built-in tables");
                    Config::default()
                }
            }
        };

        if let Ok(log_file_path) = std::env::var(env::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.blacklist, &self.whitelist, &self.log_file_path)
    }

    /// Name tables to hand to the reduction pipeline.
    pub fn tables(&self) -> NameTables {
        NameTables::new(
            self.blacklist.iter().cloned().collect(),
            self.whitelist.clone(),
        )
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location, table sizes and the log location
    /// - Reports built-in defaults when no config file exists
    pub async fn display(custom_path: Option<&str>) -> Result<(), AppError> {
        let config_path = custom_path
            .map(str::to_string)
            .unwrap_or_else(get_config_path);
        let log_dir = get_log_dir_path();
        let exists = Path::new(&config_path).exists();
        let config = Config::load(custom_path).await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !exists {
            println!("(Not found, using built-in tables)");
        }
        println!("────────────────────────────────────");
        println!("Blacklisted Names:");
        println!("{}", config.blacklist.len());
        println!("────────────────────────────────────");
        println!("Whitelist Entries:");
        println!("{}", config.whitelist.len());
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a file path, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
