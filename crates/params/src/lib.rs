//! Parameter sets for the latpke hybrid encryption scheme
//!
//! Every operation in the workspace is generic over a [`ParameterSet`]: the
//! key, ciphertext and shared-secret sizes of one named configuration plus
//! the lattice constants its KEM needs. The 81 configurations live in a
//! literal table ([`PARAMETER_TABLE`]) and are validated into a read-only
//! [`ParameterRegistry`] once at startup.

#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod set;
pub mod table;

pub use error::{ParamsError, Result};
pub use registry::ParameterRegistry;
pub use set::{
    LatticeConstants, ParameterKind, ParameterRow, ParameterSet, RoundingConstants, DEM_TAG_BYTES,
};
pub use table::{PARAMETER_SET_COUNT, PARAMETER_TABLE};
