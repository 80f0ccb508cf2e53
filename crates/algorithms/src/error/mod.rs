//! Error handling for primitive backends

use latpke_api::Error as CoreError;
use thiserror::Error;

/// Failures raised while bringing up an XOF backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XofError {
    /// The backend produced the wrong known-answer output
    #[error("{backend} XOF backend failed its known-answer self-test")]
    SelfTest { backend: &'static str },
}

impl From<XofError> for CoreError {
    fn from(err: XofError) -> Self {
        CoreError::PrimitiveInitialization {
            primitive: "xof",
            message: err.to_string(),
        }
    }
}
