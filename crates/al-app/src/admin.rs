//! Admin use cases: login and the earnings dashboard.

use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use al_core::admin::AdminSession;
use al_core::ports::{CredentialVerifierPort, UsageStorePort};

/// Rejected login. The message is the one the form shows.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("اسم المستخدم أو كلمة المرور غير صحيحة.")]
pub struct InvalidCredentials;

/// Login use case for the admin surface.
pub struct AdminLogin {
    verifier: Arc<dyn CredentialVerifierPort>,
}

impl AdminLogin {
    pub fn new(verifier: Arc<dyn CredentialVerifierPort>) -> Self {
        Self { verifier }
    }

    /// Verify the submitted pair. An exact match yields an authenticated
    /// session; anything else is rejected with no state change.
    pub fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminSession, InvalidCredentials> {
        if self.verifier.verify(username, password) {
            info!(username, "admin login accepted");
            let mut session = AdminSession::new();
            session.login();
            Ok(session)
        } else {
            warn!(username, "admin login rejected");
            Err(InvalidCredentials)
        }
    }
}

/// Dashboard figures derived from the persisted counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsSummary {
    pub total_payments: u64,
    pub earnings_usd: u64,
}

/// Earnings dashboard use case: read the payment counter, derive the
/// earnings figure, and reset after a manual withdrawal.
pub struct EarningsDashboard {
    usage_store: Arc<dyn UsageStorePort>,
}

impl EarningsDashboard {
    pub fn new(usage_store: Arc<dyn UsageStorePort>) -> Self {
        Self { usage_store }
    }

    pub async fn summary(&self) -> anyhow::Result<EarningsSummary> {
        let span = info_span!("admin.earnings_summary");

        async {
            let counters = self
                .usage_store
                .load()
                .await
                .context("load usage counters failed")?;
            Ok(EarningsSummary {
                total_payments: counters.total_payments,
                earnings_usd: counters.earnings_usd(),
            })
        }
        .instrument(span)
        .await
    }

    /// Zero the payment counter after the operator has transferred the
    /// earnings by hand. Usage counters are left untouched.
    pub async fn reset(&self) -> anyhow::Result<()> {
        let span = info_span!("admin.earnings_reset");

        async {
            let mut counters = self
                .usage_store
                .load()
                .await
                .context("load usage counters failed")?;
            counters.reset_payments();
            self.usage_store
                .save(&counters)
                .await
                .context("persist counters after reset failed")?;
            info!("earnings counter reset");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
