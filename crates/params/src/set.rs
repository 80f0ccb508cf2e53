//! Parameter set records and the sizes derived from them

use serde::Serialize;

use crate::error::{ParamsError, Result};

// Column positions inside a raw table row
const POS_SECRET_KEY_BYTES: usize = 0;
const POS_PUBLIC_KEY_BYTES: usize = 1;
const POS_CRYPTO_BYTES: usize = 2;
const POS_CIPHERTEXT_BYTES: usize = 3;
const POS_KAPPA_BYTES: usize = 4;
const POS_D: usize = 5;
const POS_N: usize = 6;
const POS_H: usize = 7;
const POS_Q_BITS: usize = 8;
const POS_P_BITS: usize = 9;
const POS_T_BITS: usize = 10;
const POS_B_BITS: usize = 11;
const POS_N_BAR: usize = 12;
const POS_M_BAR: usize = 13;
const POS_F: usize = 14;
const POS_XE: usize = 15;

/// Fixed authentication tag overhead the DEM appends to every message.
pub const DEM_TAG_BYTES: usize = 16;

/// One literal row of the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterRow {
    /// Display identifier
    pub name: &'static str,
    /// `C_SK, C_PK, C_B, C_CT, kappa_bytes, d, n, h, q_bits, p_bits, t_bits,
    /// b_bits, n_bar, m_bar, f, xe`
    pub values: [u32; 16],
}

/// What a parameter set was sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterKind {
    /// CPA-only key encapsulation; the secret key is just the CPA seed.
    Kem,
    /// Public-key encryption of arbitrary-length messages.
    Encrypt,
}

/// Lattice shape and error-correction constants.
///
/// These are consumed by the KEM only. Everything above the KEM forwards
/// them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LatticeConstants {
    pub d: u32,
    pub n: u32,
    pub h: u32,
    pub q_bits: u32,
    pub p_bits: u32,
    pub t_bits: u32,
    pub b_bits: u32,
    pub n_bar: u32,
    pub m_bar: u32,
    /// Number of correctable errors; `u32::MAX` in the `xfail_ntru` family
    pub f: u32,
    /// Extra bits reserved for the error-correcting code
    pub xe: u32,
}

/// Rounding constants the KEM derives from the bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundingConstants {
    pub z_bits: u32,
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
}

impl LatticeConstants {
    /// `d / n`; 1 for ring variants, `d` for the non-ring ones.
    pub fn k(&self) -> u32 {
        if self.n == 0 {
            0
        } else {
            self.d / self.n
        }
    }

    /// Number of ciphertext symbols carrying the `kappa` payload plus ECC.
    pub fn mu(&self, kappa_bytes: usize) -> usize {
        if self.b_bits == 0 {
            return 0;
        }
        (8 * kappa_bytes + self.xe as usize).div_ceil(self.b_bits as usize)
    }

    /// Public key size: seed plus the packed `B` matrix.
    pub fn pk_size(&self, kappa_bytes: usize) -> usize {
        kappa_bytes + bits_to_bytes(self.d as usize * self.n_bar as usize * self.p_bits as usize)
    }

    /// CPA ciphertext size: packed `U` plus the packed `v` payload.
    pub fn ct_size(&self, kappa_bytes: usize) -> usize {
        bits_to_bytes(self.d as usize * self.m_bar as usize * self.p_bits as usize)
            + bits_to_bytes(self.mu(kappa_bytes) * self.t_bits as usize)
    }

    pub fn rounding(&self) -> RoundingConstants {
        let z_bits = (self.q_bits - self.p_bits + self.t_bits).max(self.p_bits);
        RoundingConstants {
            z_bits,
            h1: 1 << (self.q_bits - self.p_bits - 1),
            h2: 1 << (self.q_bits - z_bits - 1),
            h3: (1 << (self.p_bits - self.t_bits - 1)) + (1 << (self.p_bits - self.b_bits - 1))
                - (1 << (self.q_bits - z_bits - 1)),
        }
    }

    fn check(&self, name: &'static str) -> Result<()> {
        let invalid = |reason: String| Err(ParamsError::InvalidRow { name, reason });

        if self.n == 0 || self.d == 0 || !(self.n == self.d || self.n == 1) {
            return invalid(format!(
                "n and d must be non-zero and n must equal d or 1 (n={}, d={})",
                self.n, self.d
            ));
        }
        if self.h == 0 || self.h > self.d || self.h & 1 == 1 {
            return invalid(format!(
                "hamming weight must be even, non-zero and at most d (h={}, d={})",
                self.h, self.d
            ));
        }
        if self.t_bits == 0 || self.t_bits >= self.p_bits || self.p_bits >= self.q_bits {
            return invalid(format!(
                "bit widths must satisfy 0 < t < p < q (t={}, p={}, q={})",
                self.t_bits, self.p_bits, self.q_bits
            ));
        }
        if self.n_bar == 0 || self.m_bar == 0 {
            return invalid(format!(
                "dimensions must be non-zero (n_bar={}, m_bar={})",
                self.n_bar, self.m_bar
            ));
        }
        if self.b_bits == 0 || self.b_bits >= self.p_bits {
            return invalid(format!(
                "b_bits must satisfy 0 < b < p (b={}, p={})",
                self.b_bits, self.p_bits
            ));
        }
        Ok(())
    }
}

/// One named security configuration.
///
/// Built and validated from a [`ParameterRow`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub secret_key_bytes: usize,
    pub public_key_bytes: usize,
    /// Fixed-length CPA ciphertext carried in front of the confirmation tag
    pub kem_ciphertext_bytes: usize,
    /// `kappa_bytes`: length of the secret handed to the DEM
    pub shared_secret_bytes: usize,
    /// NIST `CRYPTO_BYTES` as listed in the table
    pub crypto_bytes: usize,
    /// NIST `CRYPTO_CIPHERTEXTBYTES` as listed in the table
    pub crypto_ciphertext_bytes: usize,
    pub lattice: LatticeConstants,
}

impl ParameterSet {
    /// Validate a raw row and derive its sizes.
    pub fn from_row(row: &ParameterRow) -> Result<Self> {
        let v = &row.values;
        let name = row.name;
        let kappa_bytes = v[POS_KAPPA_BYTES] as usize;
        if kappa_bytes == 0 {
            return Err(ParamsError::InvalidRow {
                name,
                reason: "kappa_bytes must be non-zero".into(),
            });
        }

        let lattice = LatticeConstants {
            d: v[POS_D],
            n: v[POS_N],
            h: v[POS_H],
            q_bits: v[POS_Q_BITS],
            p_bits: v[POS_P_BITS],
            t_bits: v[POS_T_BITS],
            b_bits: v[POS_B_BITS],
            n_bar: v[POS_N_BAR],
            m_bar: v[POS_M_BAR],
            f: v[POS_F],
            xe: v[POS_XE],
        };
        lattice.check(name)?;

        let kind = if v[POS_CIPHERTEXT_BYTES] == 0 {
            ParameterKind::Encrypt
        } else {
            ParameterKind::Kem
        };
        let pk_size = lattice.pk_size(kappa_bytes);
        let ct_size = lattice.ct_size(kappa_bytes);

        let (expected_sk, expected_bytes, expected_ct) = match kind {
            ParameterKind::Encrypt => (
                2 * kappa_bytes + pk_size,
                ct_size + kappa_bytes + DEM_TAG_BYTES,
                0,
            ),
            ParameterKind::Kem => (kappa_bytes, kappa_bytes, ct_size),
        };
        let checks = [
            ("secret key", v[POS_SECRET_KEY_BYTES] as usize, expected_sk),
            ("public key", v[POS_PUBLIC_KEY_BYTES] as usize, pk_size),
            ("crypto bytes", v[POS_CRYPTO_BYTES] as usize, expected_bytes),
            ("ciphertext", v[POS_CIPHERTEXT_BYTES] as usize, expected_ct),
        ];
        for (what, listed, derived) in checks {
            if listed != derived {
                return Err(ParamsError::InvalidRow {
                    name,
                    reason: format!("{what} size {listed} does not match derived size {derived}"),
                });
            }
        }

        Ok(Self {
            name,
            kind,
            secret_key_bytes: v[POS_SECRET_KEY_BYTES] as usize,
            public_key_bytes: pk_size,
            kem_ciphertext_bytes: ct_size,
            shared_secret_bytes: kappa_bytes,
            crypto_bytes: v[POS_CRYPTO_BYTES] as usize,
            crypto_ciphertext_bytes: v[POS_CIPHERTEXT_BYTES] as usize,
            lattice,
        })
    }

    /// Length of the fixed `c1` prefix: CPA ciphertext plus confirmation tag.
    pub fn c1_len(&self) -> usize {
        self.kem_ciphertext_bytes + self.shared_secret_bytes
    }

    /// Total hybrid ciphertext length for a message of `message_len` bytes.
    pub fn ciphertext_len(&self, message_len: usize) -> usize {
        self.c1_len() + message_len + DEM_TAG_BYTES
    }

    /// Secret key length of the CCA transform: `sk_cpa || y || pk`.
    pub fn cca_secret_key_bytes(&self) -> usize {
        2 * self.shared_secret_bytes + self.public_key_bytes
    }

    pub fn is_encrypt(&self) -> bool {
        self.kind == ParameterKind::Encrypt
    }
}

fn bits_to_bytes(bits: usize) -> usize {
    bits.div_ceil(8)
}
