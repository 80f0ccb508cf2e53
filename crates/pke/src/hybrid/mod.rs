//! CCA composition of a KEM and a DEM
//!
//! Ciphertext layout:
//!
//! ```text
//! c1 = KEM ciphertext || confirmation   (kem_ciphertext_bytes + shared_secret_bytes)
//! c2 = DEM ciphertext || tag            (message_len + TAG_BYTES)
//! ```
//!
//! Decryption never reveals which half failed: a ciphertext long enough to
//! split is always run through both the KEM and the DEM, and any failure
//! after the length check is reported as
//! [`Error::AuthenticationFailure`].

use latpke_api::{Dem, Error, Kem, PublicKey, Result, SecretKey, SecretVec, SharedSecret};
use latpke_params::ParameterSet;
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, warn};
use zeroize::Zeroize;

/// Hybrid encryption bound to one parameter set.
#[derive(Debug, Clone)]
pub struct HybridPke<K, D> {
    params: ParameterSet,
    kem: K,
    dem: D,
}

impl<K: Kem, D: Dem> HybridPke<K, D> {
    /// Bind `kem` and `dem` to `params`.
    ///
    /// Fails with [`Error::Configuration`] for CPA-only sets and for sets
    /// whose shared secret is not a key size the DEM accepts.
    pub fn new(params: ParameterSet, kem: K, dem: D) -> Result<Self> {
        if !params.is_encrypt() {
            warn!(set = params.name, "rejecting CPA-only parameter set");
            return Err(Error::configuration(
                "hybrid pke",
                format!("{} is a CPA-only KEM parameter set", params.name),
            ));
        }
        if params.kem_ciphertext_bytes == 0 {
            warn!(set = params.name, "rejecting parameter set without KEM ciphertext");
            return Err(Error::configuration(
                "hybrid pke",
                format!("{} has no KEM ciphertext", params.name),
            ));
        }
        if !D::supports_key_size(params.shared_secret_bytes) {
            warn!(
                set = params.name,
                kappa_bytes = params.shared_secret_bytes,
                dem = dem.name(),
                "shared secret size not accepted by DEM"
            );
            return Err(Error::configuration(
                "hybrid pke",
                format!(
                    "{} shares {}-byte secrets, {} accepts {:?}",
                    params.name,
                    params.shared_secret_bytes,
                    dem.name(),
                    D::KEY_SIZES
                ),
            ));
        }

        debug!(set = params.name, kem = kem.name(), dem = dem.name(), "hybrid pke ready");
        Ok(Self { params, kem, dem })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn kem(&self) -> &K {
        &self.kem
    }

    pub fn dem(&self) -> &D {
        &self.dem
    }

    /// Length of the fixed KEM prefix `c1`.
    pub fn c1_len(&self) -> usize {
        self.params.c1_len()
    }

    /// Shortest ciphertext that can be split: `c1` plus an empty-message DEM output.
    pub fn min_ciphertext_len(&self) -> usize {
        self.c1_len() + D::TAG_BYTES
    }

    pub fn ciphertext_len(&self, message_len: usize) -> usize {
        self.min_ciphertext_len() + message_len
    }

    #[instrument(level = "debug", skip_all, fields(set = self.params.name))]
    pub fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
        let (pk, sk) = self.kem.keygen(&self.params, rng)?;
        expect_len("kem", "public key", pk.len(), self.params.public_key_bytes)?;
        expect_len("kem", "secret key", sk.len(), self.params.secret_key_bytes)?;
        Ok((pk, sk))
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(set = self.params.name, message_len = message.len())
    )]
    pub fn encrypt<R: CryptoRng + RngCore>(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let (c1, secret) = self.kem.encapsulate(&self.params, public_key, rng)?;
        expect_len("kem", "ciphertext", c1.len(), self.c1_len())?;
        expect_len("kem", "shared secret", secret.len(), self.params.shared_secret_bytes)?;

        let c2 = self.dem.encrypt(secret.as_ref(), message)?;
        expect_len("dem", "ciphertext", c2.len(), message.len() + D::TAG_BYTES)?;

        let mut ciphertext = c1;
        ciphertext.extend_from_slice(&c2);
        debug!(ciphertext_len = ciphertext.len(), "encrypted");
        Ok(ciphertext)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(set = self.params.name, ciphertext_len = ciphertext.len())
    )]
    pub fn decrypt(&self, secret_key: &SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let minimum = self.min_ciphertext_len();
        if ciphertext.len() < minimum {
            debug!(minimum, "ciphertext too short");
            return Err(Error::MalformedCiphertext {
                minimum,
                actual: ciphertext.len(),
            });
        }

        let (c1, c2) = ciphertext.split_at(self.c1_len());
        let kappa = self.params.shared_secret_bytes;

        // A failed decapsulation still feeds the DEM, with a zeroed key
        let (secret, kem_ok) = match self.kem.decapsulate(&self.params, c1, secret_key) {
            Ok(secret) if secret.len() == kappa => (secret, true),
            _ => (SharedSecret::new(SecretVec::zeroed(kappa)), false),
        };
        let opened = self.dem.decrypt(secret.as_ref(), c2);

        match opened {
            Ok(message) if kem_ok => Ok(message),
            Ok(mut message) => {
                message.zeroize();
                debug!("authentication failed");
                Err(Error::AuthenticationFailure)
            }
            Err(_) => {
                debug!("authentication failed");
                Err(Error::AuthenticationFailure)
            }
        }
    }
}

fn expect_len(primitive: &'static str, what: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::primitive(
            primitive,
            format!("{what} is {actual} bytes, expected {expected}"),
        ));
    }
    Ok(())
}
