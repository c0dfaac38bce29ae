//! Credential store adapters.

pub mod env;
pub mod in_memory;
