//! Domain layer: gateway value types and the hashing rules applied to them.

pub mod amount;
pub mod credentials;
pub mod digest;
pub mod payment;
pub mod ports;
