//! Error type for parameter table validation and lookup

use thiserror::Error;

/// Failures raised while building or querying the parameter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// No parameter set carries the requested name
    #[error("parameter set not found: {name}")]
    NotFound { name: String },

    /// Registry index past the end of the table
    #[error("parameter index {index} out of range (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A table row violates a structural rule
    #[error("invalid parameter set {name}: {reason}")]
    InvalidRow { name: &'static str, reason: String },

    /// Two rows share one display name
    #[error("duplicate parameter set name: {name}")]
    DuplicateName { name: &'static str },
}

/// Result type for parameter operations
pub type Result<T> = core::result::Result<T, ParamsError>;
