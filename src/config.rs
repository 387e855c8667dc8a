//! Configuration module
//!
//! TOML application configuration and tracing setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application configuration loaded from a TOML file.
///
/// Every section and field is optional in the file; missing values fall
/// back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub albums: AlbumsSettings,
    pub users: UserPolicySettings,
    pub logging: LoggingSettings,
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite database file path.
    pub path: String,
    /// Full connection URL; overrides `path` when set.
    pub url: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./users.db".to_string(),
            url: None,
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

/// Albums microservice settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlbumsSettings {
    /// Base URL of the albums microservice.
    pub base_url: String,
    /// Request timeout in seconds, applied when the albums client is
    /// built from these settings.
    pub timeout_seconds: u64,
}

impl Default for AlbumsSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8011".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// User-management policy settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserPolicySettings {
    /// Reject duplicate emails with a lookup before the write instead of
    /// relying on the storage unique constraint.
    pub reject_duplicate_email: bool,
}

impl Default for UserPolicySettings {
    fn default() -> Self {
        Self {
            reject_duplicate_email: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Default config file location (`~/.config/photoapp-users/config.toml`).
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("photoapp-users")
        .join("config.toml")
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
