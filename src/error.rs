use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid field: {field} ({reason})")]
    InvalidField { field: &'static str, reason: String },
    #[error("PayU merchant credentials are not configured")]
    NotConfigured,
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl PaymentError {
    /// Whether the caller can fix the error by changing its request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PaymentError::MissingField(_) | PaymentError::InvalidField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = PaymentError::MissingField("amount");
        assert_eq!(err.to_string(), "Missing field: amount");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_configuration_error_is_server_side() {
        assert!(!PaymentError::NotConfigured.is_client_error());
    }

    #[test]
    fn test_malformed_body_keeps_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = parse_err.to_string();
        let err = PaymentError::from(parse_err);
        assert!(err.to_string().contains(&expected));
        assert!(!err.is_client_error());
    }
}
