//! Flow controller
//!
//! Drives the pure [`FlowSession`] and performs the side effects the state
//! machine itself stays free of: counter persistence, the simulated charge,
//! and the model call. Counters are mutated only on the documented
//! transitions; a failed report consumes nothing.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, warn, Instrument};

use al_core::flow::{FlowError, FlowSession};
use al_core::ports::{CardDetails, PaymentGatewayPort, UsageStorePort};
use al_core::{AncestryReport, AppStep, UsageCounters, UserData};

use crate::report_service::{ReportError, ReportService};

/// The single message shown for any report failure. The underlying cause
/// (image format, parse, transport) is logged but never surfaced.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "فشل في إنشاء التقرير. قد تكون هناك مشكلة في الاتصال. يرجى المحاولة مرة أخرى.";

/// Shown when processing is reached with no submission to work on.
pub const MISSING_DATA_MESSAGE: &str = "حدث خطأ ما. الرجاء البدء من جديد.";

pub struct FlowController {
    session: FlowSession,
    usage_store: Arc<dyn UsageStorePort>,
    payment: Arc<dyn PaymentGatewayPort>,
    reports: ReportService,
    counters: UsageCounters,
    in_flight: bool,
}

impl FlowController {
    /// Load the persisted counters and start a fresh session at Landing.
    pub async fn new(
        usage_store: Arc<dyn UsageStorePort>,
        payment: Arc<dyn PaymentGatewayPort>,
        reports: ReportService,
    ) -> anyhow::Result<Self> {
        let counters = usage_store
            .load()
            .await
            .context("load usage counters failed")?;
        Ok(Self {
            session: FlowSession::new(),
            usage_store,
            payment,
            reports,
            counters,
            in_flight: false,
        })
    }

    pub fn step(&self) -> AppStep {
        self.session.step()
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error()
    }

    pub fn report(&self) -> Option<&AncestryReport> {
        self.session.report()
    }

    pub fn counters(&self) -> &UsageCounters {
        &self.counters
    }

    /// Landing -> Upload.
    pub fn start(&mut self) -> Result<(), FlowError> {
        self.session.start()
    }

    /// Upload -> Processing or Payment, depending on available credit.
    pub fn submit(&mut self, data: UserData) -> Result<AppStep, FlowError> {
        self.session.submit(data, &self.counters)
    }

    /// Payment -> Processing. Runs the gateway charge, then records the
    /// payment (+5 uses, +1 payment) and persists.
    pub async fn complete_payment(&mut self, card: &CardDetails) -> anyhow::Result<AppStep> {
        let span = info_span!("flow.complete_payment");

        async {
            if self.session.step() != AppStep::Payment {
                return Err(FlowError::InvalidTransition {
                    from: self.session.step(),
                    event: "payment_complete",
                }
                .into());
            }

            self.payment
                .charge(card)
                .await
                .context("payment charge failed")?;

            self.session.payment_complete()?;
            self.counters.record_payment();
            self.usage_store
                .save(&self.counters)
                .await
                .context("persist counters after payment failed")?;

            info!(
                remaining_uses = self.counters.remaining_uses,
                total_payments = self.counters.total_payments,
                "payment recorded"
            );
            Ok(AppStep::Processing)
        }
        .instrument(span)
        .await
    }

    /// Run the report request for the current submission.
    ///
    /// On success: store the report, move to Results, count the use. On
    /// failure: set the generic message, move back to Upload, counters
    /// untouched. A call while a request is already in flight is rejected
    /// without any transition.
    pub async fn process(&mut self) -> anyhow::Result<AppStep> {
        let span = info_span!("flow.process");

        async {
            anyhow::ensure!(!self.in_flight, "a report request is already in flight");

            if self.session.step() != AppStep::Processing {
                return Err(FlowError::InvalidTransition {
                    from: self.session.step(),
                    event: "process",
                }
                .into());
            }

            // Defensive: the session cannot reach Processing without data,
            // but if it ever does, fail back to Upload without consuming a
            // use.
            let Some(user_data) = self.session.user_data().cloned() else {
                warn!("processing entered without user data");
                self.session.fail(MISSING_DATA_MESSAGE)?;
                return Ok(AppStep::Upload);
            };

            self.in_flight = true;
            let result = self.reports.generate(&user_data).await;
            self.in_flight = false;

            match result {
                Ok(report) => {
                    self.session.complete(report)?;
                    self.counters.record_completed_report();
                    self.usage_store
                        .save(&self.counters)
                        .await
                        .context("persist counters after report failed")?;
                    info!(
                        usage_count = self.counters.usage_count,
                        remaining_uses = self.counters.remaining_uses,
                        "report completed"
                    );
                    Ok(AppStep::Results)
                }
                Err(err) => {
                    // The three causes stay distinguishable here even though
                    // the user sees one message for all of them.
                    let kind = match &err {
                        ReportError::InvalidImage(_) => "invalid_image",
                        ReportError::MalformedResponse(_) => "malformed_response",
                        ReportError::Transport(_) => "transport",
                    };
                    warn!(kind, error = %err, "report generation failed");
                    self.session.fail(GENERIC_FAILURE_MESSAGE)?;
                    Ok(AppStep::Upload)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Results -> Landing.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        self.session.reset()
    }
}
