//! Usage counters
//!
//! Three persisted counters drive the free-use / paid-use gate and the admin
//! earnings figure. They are mutated only on the documented flow
//! transitions: a completed payment, a completed report, and the admin
//! reset. A failed report consumes nothing.

use serde::{Deserialize, Serialize};

/// Uses granted per simulated payment.
pub const USES_PER_PAYMENT: u64 = 5;

/// Price of one payment in whole dollars; the admin dashboard derives
/// earnings from it.
pub const UNIT_PRICE_USD: u64 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    /// Completed reports, ever.
    #[serde(default)]
    pub usage_count: u64,
    /// Paid uses not yet consumed.
    #[serde(default)]
    pub remaining_uses: u64,
    /// Simulated payments recorded since the last admin reset.
    #[serde(default)]
    pub total_payments: u64,
}

impl UsageCounters {
    /// Whether a submission may proceed straight to processing. The very
    /// first report is free; afterwards a paid use must be available.
    pub fn has_credit(&self) -> bool {
        self.usage_count == 0 || self.remaining_uses > 0
    }

    /// Record one completed simulated payment.
    pub fn record_payment(&mut self) {
        self.remaining_uses += USES_PER_PAYMENT;
        self.total_payments += 1;
    }

    /// Record one successfully generated report. The free first report does
    /// not consume a paid use; later reports do, floored at zero.
    pub fn record_completed_report(&mut self) {
        if self.usage_count > 0 {
            self.remaining_uses = self.remaining_uses.saturating_sub(1);
        }
        self.usage_count += 1;
    }

    /// Earnings figure shown on the admin dashboard.
    pub fn earnings_usd(&self) -> u64 {
        self.total_payments * UNIT_PRICE_USD
    }

    /// Admin "withdrawn" action: zeroes the payment counter only.
    pub fn reset_payments(&mut self) {
        self.total_payments = 0;
    }
}
