//! Public API traits and types for the latpke library
//!
//! This crate fixes the seams of the hybrid scheme: the unified [`Error`]
//! taxonomy, the capability traits the composition layer is generic over
//! ([`Kem`], [`Dem`], [`Xof`]) and the zeroizing key containers passed
//! between them.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Dem, Kem, Xof, XofStrength};
pub use types::{PublicKey, SecretKey, SecretVec, SharedSecret};

// Parameter sets appear in every trait signature
pub use latpke_params::{ParameterKind, ParameterSet};
