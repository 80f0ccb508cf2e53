//! The chosen-plaintext-secure lattice PKE underneath the KEM

use latpke_api::{PublicKey, Result, SecretVec};
use latpke_params::ParameterSet;
use rand::{CryptoRng, RngCore};

/// CPA-secure public-key encryption of fixed `kappa`-byte messages.
///
/// For a set `p` with `kappa = p.shared_secret_bytes`:
/// - `keygen` returns a public key of `p.public_key_bytes` and a secret key
///   of `kappa` bytes
/// - `encrypt` maps a `kappa`-byte message and `kappa`-byte coins to a
///   ciphertext of `p.kem_ciphertext_bytes`, deterministically in the coins
/// - `decrypt` returns a `kappa`-byte message for any ciphertext of the right
///   length, valid or not
///
/// The lattice constants in `p.lattice` are the implementation's concern.
pub trait CpaPke {
    fn name(&self) -> &'static str;

    fn keygen<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretVec)>;

    fn encrypt(
        &self,
        params: &ParameterSet,
        public_key: &[u8],
        message: &[u8],
        rho: &[u8],
    ) -> Result<Vec<u8>>;

    fn decrypt(&self, params: &ParameterSet, secret_key: &[u8], ciphertext: &[u8])
        -> Result<SecretVec>;
}
