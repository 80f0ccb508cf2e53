//! Extendable Output Functions (XOF)
//!
//! Two backends implement the [`Xof`] capability and must agree byte for
//! byte. [`select_backend`] resolves a configured [`XofBackendKind`] into a
//! ready [`XofBackend`] after a known-answer self-test, so a broken backend
//! is reported once at startup instead of corrupting every hash call.

use latpke_api::{Xof, XofStrength};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::error::XofError;

pub mod sponge;
pub mod system;

pub use sponge::{KeccakSponge, SpongeReader, SpongeXof};
pub use system::SystemXof;

// SHAKE128("") truncated to 16 bytes
const SHAKE128_EMPTY_KAT: [u8; 16] = [
    0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d, 0x61, 0x60, 0x45, 0x50, 0x76, 0x05, 0x85, 0x3e,
];

// SHAKE256("") truncated to 16 bytes
const SHAKE256_EMPTY_KAT: [u8; 16] = [
    0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xeb, 0x74, 0x3e, 0xeb, 0x24,
];

/// Configured backend choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XofBackendKind {
    /// Delegate to the `sha3` crate
    #[default]
    System,
    /// Native Keccak sponge
    Sponge,
}

/// A backend that passed its self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XofBackend {
    System(SystemXof),
    Sponge(SpongeXof),
}

impl XofBackend {
    pub fn kind(&self) -> XofBackendKind {
        match self {
            Self::System(_) => XofBackendKind::System,
            Self::Sponge(_) => XofBackendKind::Sponge,
        }
    }
}

impl Xof for XofBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::System(xof) => xof.name(),
            Self::Sponge(xof) => xof.name(),
        }
    }

    fn customized_xof_into(
        &self,
        strength: XofStrength,
        inputs: &[&[u8]],
        customization: &[u8],
        output: &mut [u8],
    ) {
        match self {
            Self::System(xof) => xof.customized_xof_into(strength, inputs, customization, output),
            Self::Sponge(xof) => xof.customized_xof_into(strength, inputs, customization, output),
        }
    }
}

/// Resolve and self-test the configured backend.
#[instrument(level = "debug")]
pub fn select_backend(kind: XofBackendKind) -> Result<XofBackend, XofError> {
    let backend = match kind {
        XofBackendKind::System => XofBackend::System(SystemXof),
        XofBackendKind::Sponge => XofBackend::Sponge(SpongeXof),
    };
    self_test(&backend)?;
    debug!(backend = backend.name(), "xof backend ready");
    Ok(backend)
}

/// Known-answer check against SHAKE128 and SHAKE256 of the empty string.
pub fn self_test<X: Xof>(xof: &X) -> Result<(), XofError> {
    let mut out = [0u8; 16];
    xof.xof_into(XofStrength::Shake128, &[], &mut out);
    let shake128_ok = out == SHAKE128_EMPTY_KAT;
    xof.xof_into(XofStrength::Shake256, &[], &mut out);
    let shake256_ok = out == SHAKE256_EMPTY_KAT;

    if shake128_ok && shake256_ok {
        Ok(())
    } else {
        error!(backend = xof.name(), "xof self-test failed");
        Err(XofError::SelfTest { backend: xof.name() })
    }
}
