//! File-backed usage-counter repository
//!
//! Persists the three counters as a JSON file in the application data
//! directory. A missing or empty file yields default (all-zero) counters.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use al_core::ports::UsageStorePort;
use al_core::UsageCounters;

pub const DEFAULT_USAGE_FILE: &str = "usage.json";

pub struct FileUsageRepository {
    path: PathBuf,
}

impl FileUsageRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at the default filename inside `base_dir`.
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(DEFAULT_USAGE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create usage dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a temp file next to the target, then rename over it, so the
    /// target is always either the previous or the fully written contents.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp usage file failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp usage file to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl UsageStorePort for FileUsageRepository {
    async fn load(&self) -> Result<UsageCounters> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UsageCounters::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read usage file failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(UsageCounters::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse usage file failed: {}", self.path.display()))
    }

    async fn save(&self, counters: &UsageCounters) -> Result<()> {
        let content =
            serde_json::to_string_pretty(counters).context("serialize usage counters failed")?;

        self.atomic_write(&content).await
    }
}
