//! Trait definition for the key encapsulation capability

use crate::types::{PublicKey, SecretKey, SharedSecret};
use crate::Result;
use latpke_params::ParameterSet;
use rand::{CryptoRng, RngCore};

/// Key Encapsulation Mechanism sized by a [`ParameterSet`].
///
/// For a set `p`, implementations must produce:
/// - public keys of `p.public_key_bytes` and secret keys of `p.secret_key_bytes`
/// - ciphertexts of `p.kem_ciphertext_bytes + p.shared_secret_bytes`
/// - shared secrets of `p.shared_secret_bytes`
///
/// The lattice constants in `p.lattice` are the implementation's business.
pub trait Kem {
    /// Returns the KEM algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a new keypair.
    fn keygen<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretKey)>;

    /// Encapsulate a fresh shared secret to `public_key`.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<(Vec<u8>, SharedSecret)>;

    /// Recover the shared secret from `ciphertext`.
    ///
    /// Must be constant-time. Implementations with implicit rejection return
    /// a pseudo-random secret for invalid ciphertexts instead of an error.
    fn decapsulate(
        &self,
        params: &ParameterSet,
        ciphertext: &[u8],
        secret_key: &SecretKey,
    ) -> Result<SharedSecret>;
}
