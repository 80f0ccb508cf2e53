//! AES-GCM data encapsulation keyed through the XOF
//!
//! The KEM secret is never used as an AES key directly. It is expanded with
//! the configured XOF into `key_len + 12` bytes: the first `key_len` bytes key
//! AES-128/192/256-GCM (picked by the secret length) and the last 12 are the
//! nonce. Every secret is used for exactly one message, so the derived nonce
//! is never repeated under one key.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use latpke_algorithms::XofBackend;
use latpke_api::{Dem, Error, Result, Xof, XofStrength};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

/// AES-192 in GCM mode with the standard 96-bit nonce
type Aes192Gcm = AesGcm<Aes192, U12>;

const NONCE_BYTES: usize = 12;

/// The AES-GCM DEM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AesGcmDem {
    xof: XofBackend,
}

impl AesGcmDem {
    pub fn new(xof: XofBackend) -> Self {
        Self { xof }
    }

    pub fn xof(&self) -> &XofBackend {
        &self.xof
    }

    /// Expand the secret into `key || nonce`.
    fn derive_key_nonce(&self, secret: &[u8]) -> Zeroizing<Vec<u8>> {
        let strength = XofStrength::for_kappa(secret.len());
        let mut material = Zeroizing::new(vec![0u8; secret.len() + NONCE_BYTES]);
        self.xof.xof_into(strength, &[secret], &mut material);
        material
    }

    fn check_key(key: &[u8]) -> Result<()> {
        if Self::supports_key_size(key.len()) {
            Ok(())
        } else {
            Err(Error::primitive(
                "dem",
                format!("unsupported AES-GCM key length {}", key.len()),
            ))
        }
    }
}

fn seal<C>(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    let cipher =
        C::new_from_slice(key).map_err(|_| Error::primitive("dem", "invalid AES-GCM key"))?;
    cipher
        .encrypt(Nonce::<C>::from_slice(nonce), plaintext)
        .map_err(|_| Error::primitive("dem", "AES-GCM encryption failed"))
}

fn open<C>(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    let cipher =
        C::new_from_slice(key).map_err(|_| Error::primitive("dem", "invalid AES-GCM key"))?;
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), ciphertext)
        .map_err(|_| Error::AuthenticationFailure)
}

impl Dem for AesGcmDem {
    const KEY_SIZES: &'static [usize] = &[16, 24, 32];
    const TAG_BYTES: usize = 16;

    fn name(&self) -> &'static str {
        "AES-GCM"
    }

    #[instrument(
        level = "debug",
        skip(self, key, plaintext),
        fields(key_len = key.len(), plaintext_len = plaintext.len())
    )]
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Self::check_key(key)?;
        let material = self.derive_key_nonce(key);
        let (aes_key, nonce) = material.split_at(key.len());

        let sealed = match key.len() {
            16 => seal::<Aes128Gcm>(aes_key, nonce, plaintext),
            24 => seal::<Aes192Gcm>(aes_key, nonce, plaintext),
            _ => seal::<Aes256Gcm>(aes_key, nonce, plaintext),
        }?;
        debug!(ciphertext_len = sealed.len(), "dem sealed");
        Ok(sealed)
    }

    #[instrument(
        level = "debug",
        skip(self, key, ciphertext),
        fields(key_len = key.len(), ciphertext_len = ciphertext.len())
    )]
    fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < Self::TAG_BYTES {
            return Err(Error::MalformedCiphertext {
                minimum: Self::TAG_BYTES,
                actual: ciphertext.len(),
            });
        }
        Self::check_key(key)?;
        let material = self.derive_key_nonce(key);
        let (aes_key, nonce) = material.split_at(key.len());

        match key.len() {
            16 => open::<Aes128Gcm>(aes_key, nonce, ciphertext),
            24 => open::<Aes192Gcm>(aes_key, nonce, ciphertext),
            _ => open::<Aes256Gcm>(aes_key, nonce, ciphertext),
        }
    }
}
