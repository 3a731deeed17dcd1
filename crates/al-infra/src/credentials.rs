//! Config-backed admin credential verifier.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use al_core::config::AdminConfig;
use al_core::ports::CredentialVerifierPort;

/// Verifies against a single configured username/password pair.
///
/// Both sides are hashed before comparison so the constant-time check works
/// on equal-length values regardless of input length.
pub struct StaticCredentialVerifier {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl StaticCredentialVerifier {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_digest: digest(username),
            password_digest: digest(password),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(&config.username, &config.password)
    }
}

impl CredentialVerifierPort for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = digest(username).ct_eq(&self.username_digest);
        let pass_ok = digest(password).ct_eq(&self.password_digest);
        (user_ok & pass_ok).into()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
