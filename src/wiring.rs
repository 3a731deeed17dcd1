//! Adapter construction and dependency grouping for the shell.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use al_core::ports::{CredentialVerifierPort, PaymentGatewayPort, UsageStorePort, VisionModelPort};
use al_core::AppConfig;
use al_infra::{
    load_config, resolve_data_dir, FileUsageRepository, GeminiClient, GeminiConfig,
    SimulatedPaymentGateway, StaticCredentialVerifier,
};

/// Dependency grouping for the shell: just the constructed adapters, no
/// hidden logic.
pub struct AppDeps {
    pub config: AppConfig,
    pub usage_store: Arc<dyn UsageStorePort>,
    pub payment: Arc<dyn PaymentGatewayPort>,
    pub verifier: Arc<dyn CredentialVerifierPort>,
}

/// Build every adapter that does not need an API key.
pub fn build_deps(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<AppDeps> {
    let mut config = load_config(config_path)?;
    if data_dir.is_some() {
        config.storage.data_dir = data_dir;
    }

    let data_dir = resolve_data_dir(&config)?;
    tracing::debug!(data_dir = %data_dir.display(), "usage counters location resolved");

    let usage_store = Arc::new(FileUsageRepository::with_defaults(&data_dir));
    let payment = Arc::new(SimulatedPaymentGateway::new(Duration::from_millis(
        config.payment.delay_ms,
    )));
    let verifier = Arc::new(StaticCredentialVerifier::from_config(&config.admin));

    Ok(AppDeps {
        config,
        usage_store,
        payment,
        verifier,
    })
}

/// Build the hosted model client. Fails when no API key is configured; the
/// admin surface never needs one, so this is kept separate from
/// [`build_deps`].
pub fn build_model(config: &AppConfig) -> Result<Arc<dyn VisionModelPort>> {
    let api_key = config
        .model
        .api_key
        .clone()
        .context("GEMINI_API_KEY environment variable not set")?;

    let client = GeminiClient::new(GeminiConfig::new(api_key, config.model.name.clone()))?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_requires_an_api_key() {
        let config = AppConfig::default();
        assert!(build_model(&config).is_err());
    }

    #[test]
    fn cli_data_dir_overrides_config() {
        let deps = build_deps(
            Some(Path::new("/nonexistent/config.toml")),
            Some(PathBuf::from("/tmp/ancestrylens-test")),
        )
        .unwrap();
        assert_eq!(
            deps.config.storage.data_dir,
            Some(PathBuf::from("/tmp/ancestrylens-test"))
        );
    }
}
