use super::credentials::MerchantCredentials;
use crate::error::Result;
use async_trait::async_trait;

/// Source of the process-wide merchant credentials.
///
/// Implementations return `PaymentError::NotConfigured` instead of failing at
/// start-up, so a misconfigured deployment still answers requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn credentials(&self) -> Result<MerchantCredentials>;
}

pub type CredentialStoreBox = Box<dyn CredentialStore>;
