use crate::domain::credentials::MerchantCredentials;
use crate::domain::ports::CredentialStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;

/// A fixed credential pair held in memory.
///
/// Useful for tests and for embedding the service where credentials come from
/// somewhere other than the environment.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentialStore {
    credentials: Option<MerchantCredentials>,
}

impl StaticCredentialStore {
    pub fn new(credentials: MerchantCredentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// A store that behaves like a deployment with no secrets set.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn credentials(&self) -> Result<MerchantCredentials> {
        self.credentials.clone().ok_or(PaymentError::NotConfigured)
    }
}
