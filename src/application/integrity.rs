use crate::domain::credentials::MerchantCredentials;
use crate::domain::digest::sha512_hex;
use crate::domain::payment::{CallbackParams, PaymentCallback, PaymentData, PaymentRequest};
use crate::domain::ports::CredentialStoreBox;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// Body returned to checkout: the request hash and the key to submit with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedHash {
    pub hash: String,
    pub key: String,
}

/// Outcome of checking a gateway response hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashVerification {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_hash: Option<String>,
    pub received_hash: String,
}

/// Computes the request hash for `request`.
pub fn generate_hash(
    request: &PaymentRequest,
    credentials: &MerchantCredentials,
) -> GeneratedHash {
    GeneratedHash {
        hash: sha512_hex(&request.hash_sequence(credentials)),
        key: credentials.key().to_string(),
    }
}

/// Recomputes the response hash for `callback` and compares it, byte for
/// byte, with the hash the gateway sent.
pub fn verify_hash(
    callback: &PaymentCallback,
    credentials: &MerchantCredentials,
) -> HashVerification {
    let expected = sha512_hex(&callback.hash_sequence(credentials));
    HashVerification {
        is_valid: expected.as_bytes() == callback.hash.as_bytes(),
        expected_hash: Some(expected),
        received_hash: callback.hash.clone(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceOptions {
    /// Include `expectedHash` in verification results.
    pub expose_expected_hash: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            expose_expected_hash: true,
        }
    }
}

/// Validates wire payloads, resolves credentials, and applies the hash rules.
///
/// Input is validated before credentials are looked up, so a malformed
/// request is reported as such even on a misconfigured deployment.
pub struct PaymentIntegrityService {
    credential_store: CredentialStoreBox,
    options: ServiceOptions,
}

impl PaymentIntegrityService {
    pub fn new(credential_store: CredentialStoreBox, options: ServiceOptions) -> Self {
        Self {
            credential_store,
            options,
        }
    }

    pub async fn generate(&self, data: PaymentData) -> Result<GeneratedHash> {
        let request = PaymentRequest::try_from(data)?;
        let credentials = self.credential_store.credentials().await?;
        debug!(txnid = %request.txnid, "generating request hash");
        Ok(generate_hash(&request, &credentials))
    }

    pub async fn verify(&self, params: CallbackParams) -> Result<HashVerification> {
        let callback = PaymentCallback::try_from(params)?;
        let credentials = self.credential_store.credentials().await?;
        let mut verification = verify_hash(&callback, &credentials);
        debug!(
            txnid = %callback.txnid,
            status = %callback.status,
            valid = verification.is_valid,
            "verified response hash"
        );
        if !self.options.expose_expected_hash {
            verification.expected_hash = None;
        }
        Ok(verification)
    }
}
