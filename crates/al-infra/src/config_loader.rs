//! Configuration loading
//!
//! TOML file (optional) with environment overrides on top. The API key is
//! environment-only and never lives in the file.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use al_core::AppConfig;

/// App-specific directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "ancestrylens";

/// Config filename inside the app config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `path` (or the default platform location when
/// `None`), then apply environment overrides. A missing file is not an
/// error; a malformed one is.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path(),
    };

    let mut config = match path {
        Some(ref p) if p.exists() => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("read config failed: {}", p.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("parse config failed: {}", p.display()))?
        }
        _ => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Resolve the directory the usage counters live in: the configured
/// override, else the platform data dir.
pub fn resolve_data_dir(config: &AppConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.storage.data_dir {
        return Ok(dir.clone());
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .context("platform data directory is not available")
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE))
}

fn apply_env_overrides(config: &mut AppConfig) {
    // The original deployment read API_KEY; GEMINI_API_KEY wins when both
    // are set.
    config.model.api_key = env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("API_KEY"))
        .ok()
        .or(config.model.api_key.take());

    if let Ok(name) = env::var("ANCESTRYLENS_MODEL") {
        config.model.name = name;
    }
    if let Ok(username) = env::var("ANCESTRYLENS_ADMIN_USERNAME") {
        config.admin.username = username;
    }
    if let Ok(password) = env::var("ANCESTRYLENS_ADMIN_PASSWORD") {
        config.admin.password = password;
    }
    if let Ok(dir) = env::var("ANCESTRYLENS_DATA_DIR") {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }
}
