//! Admin credential verification port.

/// Verifies a submitted admin credential pair.
///
/// The admin surface depends on this contract rather than on a literal
/// comparison, so the check can be backed by configuration today and by a
/// real token service if one ever exists.
pub trait CredentialVerifierPort: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
