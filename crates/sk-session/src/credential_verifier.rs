use async_trait::async_trait;
use sk_core::Identity;

/// Resolves an identity from login credentials.
///
/// `None` means the credentials were rejected; verifiers never error.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Option<Identity>;
}
