//! Capability traits for the primitives the composition layer consumes

pub mod dem;
pub mod kem;
pub mod xof;

pub use dem::Dem;
pub use kem::Kem;
pub use xof::{Xof, XofStrength};
