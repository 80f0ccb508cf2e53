//! # latpke
//!
//! Hybrid public-key encryption with chosen-ciphertext security for
//! messages of any length. A lattice CPA key-encapsulation mechanism is
//! lifted to CCA security with a Fujisaki-Okamoto transform and paired with
//! an AES-GCM data-encapsulation mechanism, at the sizes of one of 81 named
//! parameter sets.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! latpke = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms`: XOF backends (system `sha3` and native Keccak sponge)
//! - `symmetric`: the AES-GCM DEM
//! - `kem`: the `CpaPke` trait and the FO transform
//! - `pke`: configuration, the composition layer and the byte-level façade
//! - `full` (default): everything
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`latpke-api`]: error taxonomy, `Kem`/`Dem`/`Xof` traits, key containers
//! - [`latpke-params`]: the parameter-set registry
//! - [`latpke-algorithms`]: XOF backends
//! - [`latpke-symmetric`]: AES-GCM DEM
//! - [`latpke-kem`]: FO CCA-KEM
//! - [`latpke-pke`]: hybrid encryption

// Core re-exports (always available)
pub use latpke_api as api;
pub use latpke_internal as internal;
pub use latpke_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use latpke_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use latpke_symmetric as symmetric;

#[cfg(feature = "kem")]
pub use latpke_kem as kem;

#[cfg(feature = "pke")]
pub use latpke_pke as pke;

/// Common imports for latpke users
pub mod prelude {
    pub use crate::api::{Error, Result};

    // Capability traits
    pub use crate::api::{Dem, Kem, Xof, XofStrength};

    // Key and secret containers
    pub use crate::api::{PublicKey, SecretKey, SecretVec, SharedSecret};

    pub use crate::params::{ParameterKind, ParameterRegistry, ParameterSet};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{select_backend, XofBackend, XofBackendKind};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::AesGcmDem;

    #[cfg(feature = "kem")]
    pub use crate::kem::{CpaPke, FoKem};

    #[cfg(feature = "pke")]
    pub use crate::pke::{builtin_registry, Facade, HybridPke, PkeConfig, ValidatedConfig};
}
