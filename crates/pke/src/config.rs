//! Startup configuration
//!
//! A [`PkeConfig`] names exactly one parameter set; there is no default.
//! [`PkeConfig::validate`] is the single gate that turns it into an
//! immutable [`ValidatedConfig`], resolving the set and bringing up the XOF
//! backend once.

use std::sync::OnceLock;

use latpke_algorithms::{select_backend, XofBackend, XofBackendKind};
use latpke_api::{Dem, Error, Result};
use latpke_kem::{CpaPke, FoKem};
use latpke_params::{ParameterRegistry, ParameterSet, ParamsError};
use latpke_symmetric::AesGcmDem;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::facade::Facade;
use crate::hybrid::HybridPke;

static BUILTIN_REGISTRY: OnceLock<core::result::Result<ParameterRegistry, ParamsError>> =
    OnceLock::new();

/// The built-in parameter table, validated against [`AesGcmDem`] on first use.
pub fn builtin_registry() -> Result<&'static ParameterRegistry> {
    BUILTIN_REGISTRY
        .get_or_init(|| ParameterRegistry::standard(AesGcmDem::KEY_SIZES))
        .as_ref()
        .map_err(|err| Error::from(err.clone()))
}

/// Parameter-set and backend selection, as read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PkeConfig {
    /// Exact registry name, e.g. `R5ND_1PKE_0c`
    pub parameter_set: String,
    #[serde(default)]
    pub xof_backend: XofBackendKind,
}

impl PkeConfig {
    pub fn new(parameter_set: impl Into<String>) -> Self {
        Self {
            parameter_set: parameter_set.into(),
            xof_backend: XofBackendKind::default(),
        }
    }

    pub fn with_xof_backend(mut self, kind: XofBackendKind) -> Self {
        self.xof_backend = kind;
        self
    }

    /// Resolve the parameter set and initialize the XOF backend.
    ///
    /// # Errors
    /// - [`Error::Configuration`] for an unknown name, a CPA-only set, or a
    ///   shared-secret size the DEM does not accept
    /// - [`Error::PrimitiveInitialization`] if the XOF backend fails its
    ///   self-test
    #[instrument(
        level = "debug",
        skip(self),
        fields(set = %self.parameter_set, backend = ?self.xof_backend)
    )]
    pub fn validate(&self) -> Result<ValidatedConfig> {
        let registry = builtin_registry()?;
        let params = registry.by_name(&self.parameter_set).map_err(|err| {
            warn!(%err, "unknown parameter set");
            Error::configuration("parameter set", err.to_string())
        })?;

        if !params.is_encrypt() {
            warn!("parameter set is CPA-only");
            return Err(Error::configuration(
                "parameter set",
                format!("{} is a CPA-only KEM set, not usable for encryption", params.name),
            ));
        }
        if !AesGcmDem::supports_key_size(params.shared_secret_bytes) {
            warn!(kappa_bytes = params.shared_secret_bytes, "kappa not a DEM key size");
            return Err(Error::configuration(
                "parameter set",
                format!(
                    "{}-byte shared secret is not an AES-GCM key size",
                    params.shared_secret_bytes
                ),
            ));
        }

        let xof = select_backend(self.xof_backend)?;
        debug!("configuration validated");
        Ok(ValidatedConfig {
            params: params.clone(),
            xof,
        })
    }
}

/// A checked selection, threaded into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    params: ParameterSet,
    xof: XofBackend,
}

impl ValidatedConfig {
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn xof(&self) -> XofBackend {
        self.xof
    }

    pub fn dem(&self) -> AesGcmDem {
        AesGcmDem::new(self.xof)
    }

    pub fn kem<P: CpaPke>(&self, cpa: P) -> FoKem<P> {
        FoKem::new(cpa, self.xof)
    }

    /// The full scheme over `cpa`: FO transform plus AES-GCM.
    pub fn hybrid<P: CpaPke>(&self, cpa: P) -> Result<HybridPke<FoKem<P>, AesGcmDem>> {
        HybridPke::new(self.params.clone(), self.kem(cpa), self.dem())
    }

    pub fn facade<P: CpaPke, R: CryptoRng + RngCore>(
        &self,
        cpa: P,
        rng: R,
    ) -> Result<Facade<FoKem<P>, AesGcmDem, R>> {
        Ok(Facade::new(self.hybrid(cpa)?, rng))
    }
}
