//! A hash-based stand-in for the lattice CPA-PKE
//!
//! It satisfies the [`CpaPke`] size and determinism contract for any
//! parameter set, which is all the CCA layers above it rely on. It offers no
//! security of its own: the public key is a hash of the secret key.
//!
//! - `pk = H_pk(sk)`
//! - `ct = r || m ^ H_mask(pk || r)` with `r = H_r(rho)`

use latpke_algorithms::XofBackend;
use latpke_api::{Error, PublicKey, Result, SecretVec, Xof, XofStrength};
use latpke_kem::CpaPke;
use latpke_params::ParameterSet;
use rand::{CryptoRng, RngCore};

const PK_DOMAIN: &[u8] = b"toy-pk";
const R_DOMAIN: &[u8] = b"toy-r";
const MASK_DOMAIN: &[u8] = b"toy-mask";

#[derive(Debug, Clone, Copy)]
pub struct ToyCpaPke {
    xof: XofBackend,
}

impl ToyCpaPke {
    pub fn new(xof: XofBackend) -> Self {
        Self { xof }
    }

    fn derive(&self, kappa: usize, inputs: &[&[u8]], domain: &[u8], len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.xof.customized_xof_into(XofStrength::for_kappa(kappa), inputs, domain, &mut out);
        out
    }

    fn mask(&self, kappa: usize, pk: &[u8], r: &[u8], m: &[u8]) -> Vec<u8> {
        let pad = self.derive(kappa, &[pk, r], MASK_DOMAIN, kappa);
        m.iter().zip(&pad).map(|(a, b)| a ^ b).collect()
    }
}

fn expect(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

impl CpaPke for ToyCpaPke {
    fn name(&self) -> &'static str {
        "toy-cpa"
    }

    fn keygen<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretVec)> {
        let kappa = params.shared_secret_bytes;
        let sk = SecretVec::random(rng, kappa);
        let pk = self.derive(kappa, &[&sk[..]], PK_DOMAIN, params.public_key_bytes);
        Ok((PublicKey::new(pk), sk))
    }

    fn encrypt(
        &self,
        params: &ParameterSet,
        public_key: &[u8],
        message: &[u8],
        rho: &[u8],
    ) -> Result<Vec<u8>> {
        let kappa = params.shared_secret_bytes;
        expect("toy public key", public_key.len(), params.public_key_bytes)?;
        expect("toy message", message.len(), kappa)?;
        expect("toy coins", rho.len(), kappa)?;

        let mut ct = self.derive(kappa, &[rho], R_DOMAIN, params.kem_ciphertext_bytes - kappa);
        let masked = self.mask(kappa, public_key, &ct, message);
        ct.extend_from_slice(&masked);
        Ok(ct)
    }

    fn decrypt(
        &self,
        params: &ParameterSet,
        secret_key: &[u8],
        ciphertext: &[u8],
    ) -> Result<SecretVec> {
        let kappa = params.shared_secret_bytes;
        expect("toy secret key", secret_key.len(), kappa)?;
        expect("toy ciphertext", ciphertext.len(), params.kem_ciphertext_bytes)?;

        let pk = self.derive(kappa, &[secret_key], PK_DOMAIN, params.public_key_bytes);
        let (r, masked) = ciphertext.split_at(ciphertext.len() - kappa);
        Ok(SecretVec::new(self.mask(kappa, &pk, r, masked)))
    }
}
