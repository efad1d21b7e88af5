// Configuration loading (config/app.toml + environment override).
//
// The result is one explicit `AppConfig` value built at startup and handed
// to the API client and UI; nothing reads configuration ambiently after
// that. Precedence, later overriding earlier:
//
//   1. built-in defaults
//   2. config/app.toml under the config directory, when present
//   3. the IPL_API_URL environment variable (base URL only)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "IPL_API_URL";

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TICK_MILLIS: u64 = 33;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Assembled config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the league API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Render interval for the terminal loop.
    pub tick_millis: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            ui: UiConfig {
                tick_millis: DEFAULT_TICK_MILLIS,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// app.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for app.toml. Every field is optional so a
/// partial file overrides only what it names.
#[derive(Debug, Clone, Default, Deserialize)]
struct AppFile {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UiSection {
    tick_millis: Option<u64>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `<config_dir>/app.toml` and the environment.
///
/// A missing file is not an error — defaults apply. A file that exists but
/// does not parse, or a config that fails validation, is.
pub fn load_config_from(
    config_dir: &Path,
    env_base_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    let path = config_dir.join("app.toml");
    if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let file: AppFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        if let Some(base_url) = file.api.base_url {
            config.api.base_url = base_url;
        }
        if let Some(timeout) = file.api.timeout_secs {
            config.api.timeout_secs = timeout;
        }
        if let Some(tick) = file.ui.tick_millis {
            config.ui.tick_millis = tick;
        }
    }

    if let Some(url) = env_base_url {
        if !url.is_empty() {
            config.api.base_url = url;
        }
    }

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();

    validate(&config)?;
    Ok(config)
}

/// Convenience wrapper: loads from the given directory (or `./config` when
/// unset) with the real process environment.
pub fn load_config(config_dir: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let dir = config_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("config"));
    load_config_from(&dir, std::env::var(API_URL_ENV).ok())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let url = &config.api.base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: format!("must start with http:// or https://, got `{url}`"),
        });
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "api.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.ui.tick_millis == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_millis".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
