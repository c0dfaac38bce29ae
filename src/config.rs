use crate::application::integrity::ServiceOptions;
use crate::infrastructure::env::EnvCredentialStore;
use clap::{ArgAction, Parser};

/// Runtime configuration, read once at start-up from flags or the environment.
#[derive(Parser, Clone)]
#[command(author, version, about = "PayU request/response hash service", long_about = None)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "PAYU_HASH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PAYU_HASH_PORT", default_value_t = 8080)]
    pub port: u16,

    /// PayU merchant key, echoed to checkout with each hash
    #[arg(long, env = "PAYU_MERCHANT_KEY", hide_env_values = true)]
    pub merchant_key: Option<String>,

    /// PayU merchant salt, never leaves the server
    #[arg(long, env = "PAYU_MERCHANT_SALT", hide_env_values = true)]
    pub merchant_salt: Option<String>,

    /// Include `expectedHash` in verification responses
    #[arg(
        long,
        env = "PAYU_EXPOSE_EXPECTED_HASH",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub expose_expected_hash: bool,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn credential_store(&self) -> EnvCredentialStore {
        EnvCredentialStore::new(self.merchant_key.clone(), self.merchant_salt.clone())
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            expose_expected_hash: self.expose_expected_hash,
        }
    }
}
