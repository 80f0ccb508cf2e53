//! Fixed-signature byte API
//!
//! Every call returns `0` on success and a negative
//! [`Error::status_code`] on failure. Output vectors are cleared on failure;
//! key buffers are only written on success.

use latpke_api::{Dem, Error, Kem, PublicKey, Result, SecretKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::hybrid::HybridPke;

/// A [`HybridPke`] bound to a randomness source.
#[derive(Debug)]
pub struct Facade<K, D, R> {
    pke: HybridPke<K, D>,
    rng: R,
}

impl<K: Kem, D: Dem> Facade<K, D, OsRng> {
    pub fn with_os_rng(pke: HybridPke<K, D>) -> Self {
        Self::new(pke, OsRng)
    }
}

impl<K: Kem, D: Dem, R: CryptoRng + RngCore> Facade<K, D, R> {
    pub fn new(pke: HybridPke<K, D>, rng: R) -> Self {
        Self { pke, rng }
    }

    pub fn pke(&self) -> &HybridPke<K, D> {
        &self.pke
    }

    pub fn crypto_publickeybytes(&self) -> usize {
        self.pke.params().public_key_bytes
    }

    pub fn crypto_secretkeybytes(&self) -> usize {
        self.pke.params().secret_key_bytes
    }

    /// Fixed ciphertext overhead on top of the message.
    pub fn crypto_bytes(&self) -> usize {
        self.pke.min_ciphertext_len()
    }

    /// Fill `pk` and `sk`, which must be exactly key-sized.
    pub fn crypto_encrypt_keypair(&mut self, pk: &mut [u8], sk: &mut [u8]) -> i32 {
        status(self.keypair_into(pk, sk))
    }

    pub fn crypto_encrypt(&mut self, ct: &mut Vec<u8>, m: &[u8], pk: &[u8]) -> i32 {
        ct.clear();
        let result = PublicKey::from_slice(pk, self.crypto_publickeybytes())
            .and_then(|pk| self.pke.encrypt(&pk, m, &mut self.rng));
        status(result.map(|ciphertext| *ct = ciphertext))
    }

    pub fn crypto_encrypt_open(&self, m: &mut Vec<u8>, ct: &[u8], sk: &[u8]) -> i32 {
        m.clear();
        let result = SecretKey::from_slice(sk, self.crypto_secretkeybytes())
            .and_then(|sk| self.pke.decrypt(&sk, ct));
        status(result.map(|message| *m = message))
    }

    fn keypair_into(&mut self, pk: &mut [u8], sk: &mut [u8]) -> Result<()> {
        expect_buffer("public key buffer", pk.len(), self.crypto_publickeybytes())?;
        expect_buffer("secret key buffer", sk.len(), self.crypto_secretkeybytes())?;

        let (public_key, secret_key) = self.pke.keypair(&mut self.rng)?;
        pk.copy_from_slice(public_key.as_ref());
        sk.copy_from_slice(secret_key.as_ref());
        Ok(())
    }
}

fn expect_buffer(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.status_code(),
    }
}
