//! Persisted usage-counter port.

use async_trait::async_trait;

use crate::usage::UsageCounters;

/// Persistence for the three usage counters.
///
/// Counters are read once at startup and written back on every mutation. A
/// store with no saved entry yields [`UsageCounters::default`].
#[async_trait]
pub trait UsageStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<UsageCounters>;
    async fn save(&self, counters: &UsageCounters) -> anyhow::Result<()>;
}
