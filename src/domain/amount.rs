use crate::error::PaymentError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Fraction digits the gateway expects in the `amount` hash segment.
const GATEWAY_SCALE: u32 = 2;

/// A monetary amount as carried in a PayU request or callback.
///
/// Checkout renders the amount with two fraction digits from its binary
/// floating-point value, rounding half away from zero, and the gateway hashes
/// exactly that text. The amount is therefore taken through `f64` and kept at
/// full binary precision before rounding: `2.675` is stored as
/// `2.67499999...` and renders as `2.67`, while the exact tie `0.125`
/// renders as `0.13`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn from_f64(value: f64) -> Result<Self, PaymentError> {
        let exact = Decimal::from_f64_retain(value).ok_or_else(|| PaymentError::InvalidField {
            field: "amount",
            reason: format!("{value} is not a representable amount"),
        })?;
        let mut rounded =
            exact.round_dp_with_strategy(GATEWAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(GATEWAY_SCALE);
        Ok(Self(rounded))
    }

    /// The amount at gateway scale.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|e| PaymentError::InvalidField {
                field: "amount",
                reason: e.to_string(),
            })?;
        Self::from_f64(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The `amount` field as it arrives on the wire.
///
/// Checkout sends a JSON number, the gateway callback sends a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    /// Empty strings and a numeric zero count as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            RawAmount::Number(n) => n.as_f64() == Some(0.0),
            RawAmount::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn parse(&self) -> Result<Amount, PaymentError> {
        match self {
            RawAmount::Number(n) => match n.as_f64() {
                Some(value) => Amount::from_f64(value),
                None => n.to_string().parse(),
            },
            RawAmount::Text(s) => s.parse(),
        }
    }
}
