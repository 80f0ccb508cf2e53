//! Hybrid public-key encryption for the latpke library
//!
//! [`HybridPke`] composes any [`Kem`](latpke_api::Kem) with any
//! [`Dem`](latpke_api::Dem) into chosen-ciphertext-secure encryption of
//! arbitrary-length messages. [`PkeConfig`] selects one parameter set and
//! XOF backend at startup, and [`Facade`] exposes the fixed-signature byte
//! API with status codes.

#![forbid(unsafe_code)]

pub mod config;
pub mod facade;
pub mod hybrid;

pub use config::{builtin_registry, PkeConfig, ValidatedConfig};
pub use facade::Facade;
pub use hybrid::HybridPke;

pub use latpke_api::{Error, Result};
