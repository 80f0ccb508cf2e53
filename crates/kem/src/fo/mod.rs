//! Fujisaki-Okamoto transform with implicit rejection
//!
//! Key layout: `sk = sk_cpa || y || pk`, where `y` is the rejection seed.
//! Ciphertext layout: `ct = CPA ciphertext || g`, where `g` is a
//! `kappa`-byte confirmation value.
//!
//! With `H` the XOF at [`XofStrength::for_kappa`]:
//! - encapsulate: `L || g || rho = H(m || pk)`, `K = H(L || ct)`
//! - decapsulate: re-derive and re-encrypt; on mismatch `L` is replaced by
//!   `y` in constant time, so an invalid ciphertext yields a pseudo-random
//!   key instead of an error.

use latpke_algorithms::XofBackend;
use latpke_api::{
    Error, Kem, PublicKey, Result, SecretKey, SecretVec, SharedSecret, Xof, XofStrength,
};
use latpke_internal::constant_time::{ct_assign, ct_eq_choice};
use latpke_params::ParameterSet;
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::cpa::CpaPke;

/// CCA-secure KEM over the CPA scheme `P`.
#[derive(Debug, Clone)]
pub struct FoKem<P> {
    cpa: P,
    xof: XofBackend,
}

impl<P: CpaPke> FoKem<P> {
    pub fn new(cpa: P, xof: XofBackend) -> Self {
        Self { cpa, xof }
    }

    pub fn cpa(&self) -> &P {
        &self.cpa
    }

    fn hash(&self, kappa: usize, inputs: &[&[u8]], output: &mut [u8]) {
        self.xof.xof_into(XofStrength::for_kappa(kappa), inputs, output);
    }

    /// `L || g || rho = H(m || pk)`, `3 * kappa` bytes.
    fn derive_lgr(&self, kappa: usize, message: &[u8], public_key: &[u8]) -> Zeroizing<Vec<u8>> {
        let mut lgr = Zeroizing::new(vec![0u8; 3 * kappa]);
        self.hash(kappa, &[message, public_key], &mut lgr);
        lgr
    }

    fn cpa_output_len(&self, what: &str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::primitive(
                "kem",
                format!(
                    "{} produced a {what} of {actual} bytes, expected {expected}",
                    self.cpa.name()
                ),
            ));
        }
        Ok(())
    }
}

fn check_input(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

impl<P: CpaPke> Kem for FoKem<P> {
    fn name(&self) -> &'static str {
        "FO-KEM"
    }

    #[instrument(level = "debug", skip_all, fields(set = params.name))]
    fn keygen<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretKey)> {
        let kappa = params.shared_secret_bytes;
        let pk_size = params.public_key_bytes;

        let (pk, sk_cpa) = self.cpa.keygen(params, rng)?;
        self.cpa_output_len("public key", pk.len(), pk_size)?;
        self.cpa_output_len("secret key", sk_cpa.len(), kappa)?;

        let mut sk = SecretVec::zeroed(params.cca_secret_key_bytes());
        let buf = sk.as_mut_slice();
        buf[..kappa].copy_from_slice(&sk_cpa);
        rng.fill_bytes(&mut buf[kappa..2 * kappa]);
        buf[2 * kappa..].copy_from_slice(pk.as_ref());

        debug!(pk_len = pk.len(), sk_len = sk.len(), "fo keypair generated");
        Ok((pk, SecretKey::new(sk)))
    }

    #[instrument(level = "debug", skip_all, fields(set = params.name))]
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        params: &ParameterSet,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<(Vec<u8>, SharedSecret)> {
        let kappa = params.shared_secret_bytes;
        check_input("public key", public_key.len(), params.public_key_bytes)?;

        let m = SecretVec::random(rng, kappa);
        let lgr = self.derive_lgr(kappa, &m, public_key.as_ref());
        let (l, rest) = lgr.split_at(kappa);
        let (g, rho) = rest.split_at(kappa);

        let mut ct = self.cpa.encrypt(params, public_key.as_ref(), &m, rho)?;
        self.cpa_output_len("ciphertext", ct.len(), params.kem_ciphertext_bytes)?;
        ct.extend_from_slice(g);

        let mut k = SecretVec::zeroed(kappa);
        self.hash(kappa, &[l, &ct[..]], k.as_mut_slice());
        Ok((ct, SharedSecret::new(k)))
    }

    #[instrument(level = "debug", skip_all, fields(set = params.name))]
    fn decapsulate(
        &self,
        params: &ParameterSet,
        ciphertext: &[u8],
        secret_key: &SecretKey,
    ) -> Result<SharedSecret> {
        let kappa = params.shared_secret_bytes;
        check_input("kem ciphertext", ciphertext.len(), params.c1_len())?;
        check_input("secret key", secret_key.len(), params.cca_secret_key_bytes())?;

        let (sk_cpa, rest) = secret_key.as_ref().split_at(kappa);
        let (y, pk) = rest.split_at(kappa);

        let m_prime = self
            .cpa
            .decrypt(params, sk_cpa, &ciphertext[..params.kem_ciphertext_bytes])?;
        self.cpa_output_len("message", m_prime.len(), kappa)?;

        let lgr = self.derive_lgr(kappa, &m_prime, pk);
        let (l_prime, rest) = lgr.split_at(kappa);
        let (g_prime, rho_prime) = rest.split_at(kappa);

        let mut ct_prime = self.cpa.encrypt(params, pk, &m_prime, rho_prime)?;
        ct_prime.extend_from_slice(g_prime);

        // Select L' or y without branching on the comparison
        let reject = !ct_eq_choice(&ct_prime, ciphertext);
        let mut selected = Zeroizing::new(l_prime.to_vec());
        ct_assign(&mut selected, y, reject);

        let mut k = SecretVec::zeroed(kappa);
        self.hash(kappa, &[&selected[..], ciphertext], k.as_mut_slice());
        Ok(SharedSecret::new(k))
    }
}
