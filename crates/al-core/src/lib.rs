//! # al-core
//!
//! Core domain models and business rules for AncestryLens.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the five-step flow state machine, the report model and
//! percentage normalizer, usage counters, and the port contracts the
//! application layer depends on.

pub mod admin;
pub mod config;
pub mod flow;
pub mod media;
pub mod ports;
pub mod report;
pub mod route;
pub mod usage;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use flow::{AppStep, FlowSession, UserData};
pub use report::{AncestryRegion, AncestryReport, Confidence, HistoricalContext};
pub use route::Route;
pub use usage::UsageCounters;
