use std::fmt;

/// The merchant key and salt issued by PayU.
///
/// The key is public to the checkout page; the salt must stay on the server,
/// so `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct MerchantCredentials {
    key: String,
    salt: String,
}

impl MerchantCredentials {
    /// Returns `None` when either half is missing or blank.
    pub fn new(key: impl Into<String>, salt: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        let salt = salt.into().trim().to_string();
        if key.is_empty() || salt.is_empty() {
            return None;
        }
        Some(Self { key, salt })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

impl fmt::Debug for MerchantCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantCredentials")
            .field("key", &self.key)
            .field("salt", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_halves_are_rejected() {
        assert!(MerchantCredentials::new("", "salt").is_none());
        assert!(MerchantCredentials::new("key", "   ").is_none());
        assert!(MerchantCredentials::new("key", "salt").is_some());
    }

    #[test]
    fn test_debug_redacts_salt() {
        let creds = MerchantCredentials::new("gtKFFx", "eCwWELxi").unwrap();
        let printed = format!("{creds:?}");
        assert!(printed.contains("gtKFFx"));
        assert!(!printed.contains("eCwWELxi"));
    }
}
