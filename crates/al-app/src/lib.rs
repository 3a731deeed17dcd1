//! AncestryLens application orchestration layer
//!
//! This crate contains the use cases on top of `al-core`: the report
//! generation service, the flow controller that performs the counter side
//! effects, and the admin login/dashboard operations.

pub mod admin;
pub mod flow_controller;
pub mod report_service;
pub mod usage_info;

pub use admin::{AdminLogin, EarningsDashboard, EarningsSummary, InvalidCredentials};
pub use flow_controller::{FlowController, GENERIC_FAILURE_MESSAGE, MISSING_DATA_MESSAGE};
pub use report_service::{ReportError, ReportService};
pub use usage_info::usage_notice;
