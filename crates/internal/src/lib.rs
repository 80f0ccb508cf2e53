//! Internal utilities for the latpke library
//!
//! Not part of the public API; shared by the primitive crates.

#![forbid(unsafe_code)]

pub mod constant_time;
