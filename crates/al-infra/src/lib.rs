//! Infrastructure adapters for AncestryLens: the hosted model client, the
//! file-backed usage store, the simulated payment gateway, the credential
//! verifier, and config/file loading helpers.

pub mod config_loader;
pub mod credentials;
pub mod gemini;
pub mod media_fs;
pub mod payment;
pub mod usage_store;

pub use config_loader::{load_config, resolve_data_dir};
pub use credentials::StaticCredentialVerifier;
pub use gemini::{GeminiClient, GeminiConfig};
pub use payment::SimulatedPaymentGateway;
pub use usage_store::FileUsageRepository;
