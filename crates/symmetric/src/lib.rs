//! Symmetric data encapsulation for the latpke library
//!
//! The DEM turns a one-time KEM secret into an AES-GCM key and nonce through
//! the configured XOF, then seals the message with a 16-byte tag.

#![forbid(unsafe_code)]

pub mod dem;

pub use dem::AesGcmDem;

pub use latpke_api::{Error, Result};
