//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Slices of different length compare unequal; the length itself is treated
/// as public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time conditional assignment
///
/// Overwrites `dst` with `src` when `choice` is set, otherwise leaves it
/// unchanged. Returns `false` without touching `dst` on a length mismatch.
pub fn ct_assign(dst: &mut [u8], src: &[u8], choice: Choice) -> bool {
    if dst.len() != src.len() {
        return false;
    }

    for (d, s) in dst.iter_mut().zip(src) {
        d.conditional_assign(s, choice);
    }
    true
}
