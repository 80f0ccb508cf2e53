//! Primitive backends for the latpke library
//!
//! The only primitive implemented here is the SHAKE/cSHAKE extendable-output
//! function, in two interchangeable backends:
//!
//! - [`xof::SystemXof`] delegates to the RustCrypto `sha3` crate
//! - [`xof::SpongeXof`] is a self-contained Keccak-f[1600] sponge
//!
//! Which one runs is a configuration decision resolved once by
//! [`xof::select_backend`].

#![forbid(unsafe_code)]

pub mod error;
pub mod xof;

pub use error::XofError;
pub use xof::{select_backend, SpongeXof, SystemXof, XofBackend, XofBackendKind};
