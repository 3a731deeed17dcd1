//! Flow session: current step plus the data owned by the flow.

use thiserror::Error;

use super::{AppStep, UserData};
use crate::report::AncestryReport;
use crate::usage::UsageCounters;

/// Rejected flow events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("event `{event}` is not valid from step {from:?}")]
    InvalidTransition { from: AppStep, event: &'static str },

    /// Upload submission without an image is rejected with no transition.
    #[error("a submission requires a non-empty image")]
    MissingImage,
}

/// The state owned by the main application flow: the current step, the
/// submitted user input, the fetched report, and the last error message.
///
/// All methods validate the transition against the current step and leave
/// the session untouched when the event is rejected. Counter mutation is the
/// caller's responsibility; the session only consults counters to pick the
/// submit branch.
#[derive(Debug, Default)]
pub struct FlowSession {
    step: AppStep,
    user_data: Option<UserData>,
    report: Option<AncestryReport>,
    error: Option<String>,
}

impl FlowSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AppStep {
        self.step
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    pub fn report(&self) -> Option<&AncestryReport> {
        self.report.as_ref()
    }

    /// Last user-visible error message, cleared on `start` and on a new
    /// processing pass.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `Landing -> Upload`. Clears any prior error, user data, and report.
    pub fn start(&mut self) -> Result<(), FlowError> {
        match self.step {
            AppStep::Landing => {
                self.clear();
                self.step = AppStep::Upload;
                Ok(())
            }
            from => Err(FlowError::InvalidTransition {
                from,
                event: "start",
            }),
        }
    }

    /// `Upload -> Processing` when a credit is available, `Upload -> Payment`
    /// otherwise. Stores the submitted data. A submission without an image
    /// is rejected and the step does not change.
    pub fn submit(
        &mut self,
        data: UserData,
        counters: &UsageCounters,
    ) -> Result<AppStep, FlowError> {
        if self.step != AppStep::Upload {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                event: "submit",
            });
        }
        if data.image.is_empty() {
            return Err(FlowError::MissingImage);
        }

        self.user_data = Some(data);
        self.step = if counters.has_credit() {
            AppStep::Processing
        } else {
            AppStep::Payment
        };
        Ok(self.step)
    }

    /// `Payment -> Processing`. The caller records the payment against the
    /// counters on this transition.
    pub fn payment_complete(&mut self) -> Result<(), FlowError> {
        match self.step {
            AppStep::Payment => {
                self.step = AppStep::Processing;
                Ok(())
            }
            from => Err(FlowError::InvalidTransition {
                from,
                event: "payment_complete",
            }),
        }
    }

    /// `Processing -> Results` with the fetched report. The previous report,
    /// if any, is replaced, never merged.
    pub fn complete(&mut self, report: AncestryReport) -> Result<(), FlowError> {
        match self.step {
            AppStep::Processing => {
                self.report = Some(report);
                self.error = None;
                self.step = AppStep::Results;
                Ok(())
            }
            from => Err(FlowError::InvalidTransition {
                from,
                event: "complete",
            }),
        }
    }

    /// `Processing -> Upload` with a user-visible error message.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        match self.step {
            AppStep::Processing => {
                self.error = Some(message.into());
                self.step = AppStep::Upload;
                Ok(())
            }
            from => Err(FlowError::InvalidTransition {
                from,
                event: "fail",
            }),
        }
    }

    /// `Results -> Landing`. Same clearing side effects as `start`.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        match self.step {
            AppStep::Results => {
                self.clear();
                self.step = AppStep::Landing;
                Ok(())
            }
            from => Err(FlowError::InvalidTransition {
                from,
                event: "reset",
            }),
        }
    }

    fn clear(&mut self) {
        self.user_data = None;
        self.report = None;
        self.error = None;
    }
}
