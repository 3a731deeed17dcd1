//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Loaded from an optional TOML file with environment overrides on top; every
/// section has working defaults so a missing file is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generative model settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Admin surface settings
    #[serde(default)]
    pub admin: AdminConfig,

    /// Simulated payment settings
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier passed to the hosted API
    pub name: String,

    /// API key; never written to the config file, only read from the
    /// environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            api_key: None,
        }
    }
}

/// Admin surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,

    /// Payout destination shown on the dashboard
    pub payout_tag: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "secret".to_string(),
            payout_tag: "$d0990ali".to_string(),
        }
    }
}

/// Simulated payment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Artificial processing delay in milliseconds
    pub delay_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the usage-counter data directory; platform data dir when
    /// unset.
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = AppConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password, "secret");
        assert_eq!(config.payment.delay_ms, 2000);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"admin": {"username": "ops", "password": "x", "payout_tag": "$tag"}}"#)
                .unwrap();
        assert_eq!(config.admin.username, "ops");
        assert_eq!(config.model.name, "gemini-2.5-flash");
    }

    #[test]
    fn api_key_never_serializes() {
        let mut config = AppConfig::default();
        config.model.api_key = Some("k".to_string());
        let out = serde_json::to_string(&config).unwrap();
        assert!(!out.contains("api_key"));
    }
}
