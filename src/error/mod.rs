//! Error types.
//!
//! [`Reason`]/[`Reasons`] explain why a value failed a check; they are data,
//! never panics. [`RegistryError`] covers mistakes made while registering or
//! building constructors.

mod reason;
mod registry_error;

pub use reason::{Reason, Reasons};
pub use registry_error::RegistryError;
