//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, keeping the flow logic independent of any storage
//! technology, payment processor, or model transport.

pub mod credentials;
pub mod model;
pub mod payment;
pub mod usage_store;

pub use credentials::CredentialVerifierPort;
pub use model::{ModelError, VisionModelPort};
pub use payment::{CardDetails, PaymentGatewayPort};
pub use usage_store::UsageStorePort;
