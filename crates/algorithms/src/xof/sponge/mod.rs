//! Self-contained Keccak sponge for SHAKE and cSHAKE
//!
//! Implements FIPS PUB 202 SHAKE128/SHAKE256 and the NIST SP 800-185 cSHAKE
//! variants with an empty function name. No external crate is involved, so
//! this backend keeps working where the system backend is unavailable.

use latpke_api::{Xof, XofStrength};
use zeroize::{Zeroize, ZeroizeOnDrop};

const KECCAK_ROUNDS: usize = 24;
const KECCAK_STATE_SIZE: usize = 25; // 5x5 of 64-bit words

// Domain separation bytes
const SHAKE_PAD: u8 = 0x1F;
const CSHAKE_PAD: u8 = 0x04;

// Round constants for Keccak
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// Rotation offsets, in pi-traversal order
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// Lane visited at each step of the pi traversal
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Full Keccak-f[1600] permutation
fn keccak_f1600(state: &mut [u64; KECCAK_STATE_SIZE]) {
    for &rc in RC.iter() {
        // Theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and Pi
        let mut last = state[1];
        for i in 0..24 {
            let lane = PI[i];
            let current = state[lane];
            state[lane] = last.rotate_left(RHO[i]);
            last = current;
        }

        // Chi
        for y in 0..5 {
            let row = [
                state[5 * y],
                state[5 * y + 1],
                state[5 * y + 2],
                state[5 * y + 3],
                state[5 * y + 4],
            ];
            for x in 0..5 {
                state[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= rc;
    }
}

#[inline]
fn xor_byte(state: &mut [u64; KECCAK_STATE_SIZE], pos: usize, byte: u8) {
    state[pos / 8] ^= u64::from(byte) << (8 * (pos % 8));
}

#[inline]
fn read_byte(state: &[u64; KECCAK_STATE_SIZE], pos: usize) -> u8 {
    (state[pos / 8] >> (8 * (pos % 8))) as u8
}

/// SP 800-185 `left_encode`: length byte followed by big-endian value.
fn left_encode(value: u64) -> ([u8; 9], usize) {
    let mut out = [0u8; 9];
    let n = (8 - (value.leading_zeros() as usize / 8)).max(1);
    out[0] = n as u8;
    out[1..=n].copy_from_slice(&value.to_be_bytes()[8 - n..]);
    (out, n + 1)
}

/// Absorbing half of the sponge.
///
/// Consumed by [`KeccakSponge::finalize`], which hands out the squeezing
/// half; the state is zeroed when either half is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakSponge {
    state: [u64; KECCAK_STATE_SIZE],
    rate: usize,
    pos: usize,
    pad: u8,
}

impl KeccakSponge {
    /// Start a SHAKE (empty `customization`) or cSHAKE computation.
    pub fn new(strength: XofStrength, customization: &[u8]) -> Self {
        let mut sponge = Self {
            state: [0u64; KECCAK_STATE_SIZE],
            rate: strength.rate(),
            pos: 0,
            pad: SHAKE_PAD,
        };

        if !customization.is_empty() {
            // bytepad(encode_string(N) || encode_string(S), rate) with N empty
            let (rate_enc, rate_len) = left_encode(sponge.rate as u64);
            let (name_enc, name_len) = left_encode(0);
            let (custom_enc, custom_len) = left_encode(8 * customization.len() as u64);
            sponge.absorb(&rate_enc[..rate_len]);
            sponge.absorb(&name_enc[..name_len]);
            sponge.absorb(&custom_enc[..custom_len]);
            sponge.absorb(customization);
            if sponge.pos != 0 {
                keccak_f1600(&mut sponge.state);
                sponge.pos = 0;
            }
            sponge.pad = CSHAKE_PAD;
        }

        sponge
    }

    /// Absorb more input; may be called any number of times.
    pub fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            xor_byte(&mut self.state, self.pos, byte);
            self.pos += 1;
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Apply domain padding and switch to squeezing.
    pub fn finalize(self) -> SpongeReader {
        let mut state = self.state;
        xor_byte(&mut state, self.pos, self.pad);
        xor_byte(&mut state, self.rate - 1, 0x80);
        keccak_f1600(&mut state);

        SpongeReader {
            state,
            rate: self.rate,
            pos: 0,
        }
    }
}

/// Squeezing half of the sponge.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpongeReader {
    state: [u64; KECCAK_STATE_SIZE],
    rate: usize,
    pos: usize,
}

impl SpongeReader {
    /// Fill `output`; successive calls continue the same output stream.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *byte = read_byte(&self.state, self.pos);
            self.pos += 1;
        }
    }
}

/// Native fallback backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpongeXof;

impl Xof for SpongeXof {
    fn name(&self) -> &'static str {
        "sponge"
    }

    fn customized_xof_into(
        &self,
        strength: XofStrength,
        inputs: &[&[u8]],
        customization: &[u8],
        output: &mut [u8],
    ) {
        let mut sponge = KeccakSponge::new(strength, customization);
        for input in inputs {
            sponge.absorb(input);
        }
        sponge.finalize().squeeze(output);
    }
}
