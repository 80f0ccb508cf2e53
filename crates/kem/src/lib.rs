//! Key encapsulation for the latpke library
//!
//! The lattice CPA-PKE is consumed through the [`CpaPke`] trait; [`FoKem`]
//! lifts any such scheme to a CCA-secure [`Kem`](latpke_api::Kem) with
//! implicit rejection.

#![forbid(unsafe_code)]

pub mod cpa;
pub mod fo;

pub use cpa::CpaPke;
pub use fo::FoKem;
