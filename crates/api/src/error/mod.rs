//! Error handling for the latpke ecosystem

use latpke_params::ParamsError;
use thiserror::Error;

/// Primary error type for every latpke operation
///
/// Decryption-side failures are deliberately coarse: once a ciphertext has
/// the minimum length, every rejection surfaces as
/// [`Error::AuthenticationFailure`] with no further detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid or missing parameter selection, or a set the paired
    /// primitives cannot serve. Fatal at startup.
    #[error("configuration error: {context}: {message}")]
    Configuration {
        context: &'static str,
        message: String,
    },

    /// A primitive backend could not be brought up. Fatal, never retried.
    #[error("{primitive} failed to initialize: {message}")]
    PrimitiveInitialization {
        primitive: &'static str,
        message: String,
    },

    /// Ciphertext shorter than the fixed KEM prefix plus the DEM tag
    #[error("malformed ciphertext: need at least {minimum} bytes, got {actual}")]
    MalformedCiphertext { minimum: usize, actual: usize },

    /// Uniform decryption failure
    #[error("authentication failed")]
    AuthenticationFailure,

    /// KEM or DEM failure internal to the primitive
    #[error("{primitive} failed: {message}")]
    UnderlyingPrimitive {
        primitive: &'static str,
        message: String,
    },

    /// Registry lookup by name missed
    #[error("parameter set not found: {name}")]
    NotFound { name: String },

    /// Caller-supplied key or buffer of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for latpke operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn configuration(context: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            context,
            message: message.into(),
        }
    }

    pub fn primitive(primitive: &'static str, message: impl Into<String>) -> Self {
        Self::UnderlyingPrimitive {
            primitive,
            message: message.into(),
        }
    }

    /// Non-zero status code for the byte-level façade.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Configuration { .. } => -1,
            Self::PrimitiveInitialization { .. } => -2,
            Self::MalformedCiphertext { .. } => -3,
            Self::AuthenticationFailure => -4,
            Self::UnderlyingPrimitive { .. } => -5,
            Self::NotFound { .. } => -6,
            Self::InvalidLength { .. } => -7,
        }
    }

    /// True for errors that must stop startup rather than a single call.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::PrimitiveInitialization { .. } | Self::NotFound { .. }
        )
    }
}

impl From<ParamsError> for Error {
    fn from(err: ParamsError) -> Self {
        match err {
            ParamsError::NotFound { name } => Self::NotFound { name },
            other => Self::Configuration {
                context: "parameter registry",
                message: other.to_string(),
            },
        }
    }
}
