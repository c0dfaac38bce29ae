//! Application layer: the payment integrity service.
//!
//! `generate_hash` and `verify_hash` are pure functions over validated
//! payloads and explicitly passed credentials. `PaymentIntegrityService`
//! wraps them with wire validation and credential lookup for the HTTP layer.

pub mod integrity;
