//! Simulated payment gateway
//!
//! There is no processor behind this: the charge waits out a fixed artificial
//! delay and succeeds. The delay is not cancellable, matching the product's
//! fake checkout screen.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info};

use al_core::ports::{CardDetails, PaymentGatewayPort};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedPaymentGateway {
    async fn charge(&self, card: &CardDetails) -> anyhow::Result<()> {
        debug!(card = %card.masked_number(), "simulating payment processing");
        sleep(self.delay).await;
        info!(card = %card.masked_number(), "simulated payment captured");
        Ok(())
    }
}
