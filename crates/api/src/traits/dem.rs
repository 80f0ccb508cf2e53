//! Trait definition for the data encapsulation capability

use crate::Result;

/// Data Encapsulation Mechanism: one-time-key authenticated encryption.
///
/// Ciphertexts are exactly `plaintext.len() + TAG_BYTES` long.
pub trait Dem {
    /// Key lengths this DEM accepts.
    const KEY_SIZES: &'static [usize];

    /// Authentication overhead appended to every ciphertext.
    const TAG_BYTES: usize;

    fn name(&self) -> &'static str;

    fn supports_key_size(key_bytes: usize) -> bool {
        Self::KEY_SIZES.contains(&key_bytes)
    }

    /// Encrypt and authenticate `plaintext` under the one-time `key`.
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Verify and decrypt; any tag mismatch is
    /// [`Error::AuthenticationFailure`](crate::Error::AuthenticationFailure).
    fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}
