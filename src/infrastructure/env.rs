use crate::domain::credentials::MerchantCredentials;
use crate::domain::ports::CredentialStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::env;
use tracing::warn;

pub const MERCHANT_KEY_VAR: &str = "PAYU_MERCHANT_KEY";
pub const MERCHANT_SALT_VAR: &str = "PAYU_MERCHANT_SALT";

/// Credentials captured once from the deployment environment.
///
/// A missing key or salt is remembered as such; every lookup then reports
/// `NotConfigured` rather than the process refusing to start.
#[derive(Clone, Debug)]
pub struct EnvCredentialStore {
    credentials: Option<MerchantCredentials>,
}

impl EnvCredentialStore {
    pub fn new(key: Option<String>, salt: Option<String>) -> Self {
        let credentials = match (key, salt) {
            (Some(key), Some(salt)) => MerchantCredentials::new(key, salt),
            _ => None,
        };
        if credentials.is_none() {
            warn!(
                "{MERCHANT_KEY_VAR} or {MERCHANT_SALT_VAR} not set; hash requests will fail until configured"
            );
        }
        Self { credentials }
    }

    /// Reads `PAYU_MERCHANT_KEY` and `PAYU_MERCHANT_SALT` from the process environment.
    pub fn from_env() -> Self {
        Self::new(env::var(MERCHANT_KEY_VAR).ok(), env::var(MERCHANT_SALT_VAR).ok())
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn credentials(&self) -> Result<MerchantCredentials> {
        self.credentials.clone().ok_or(PaymentError::NotConfigured)
    }
}
