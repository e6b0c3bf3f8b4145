use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "BookSwap";
const APP_NAME: &str = "BookSwap";

pub const DEFAULT_CURRENCY: &str = "৳";
pub const DEFAULT_LOG_FILTER: &str = "book_swap=info";
pub const DEFAULT_TOAST_SECONDS: u64 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency_symbol: String,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    pub toast_seconds: u64,
    /// Replaces the bundled seed data when set.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            toast_seconds: DEFAULT_TOAST_SECONDS,
            seed_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    DirectoryUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

static SHARED: OnceLock<AppConfig> = OnceLock::new();

/// Stores the configuration loaded at startup. Later calls keep the first value.
pub fn install(config: AppConfig) -> &'static AppConfig {
    SHARED.get_or_init(|| config)
}

/// Configuration installed at startup, or the defaults.
pub fn shared() -> AppConfig {
    SHARED.get().cloned().unwrap_or_default()
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

impl AppConfig {
    /// Reads `config.json`. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file().ok_or(ConfigError::DirectoryUnavailable)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.toast_seconds.max(1))
    }
}
