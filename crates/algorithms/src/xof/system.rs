//! SHAKE and cSHAKE through the RustCrypto `sha3` crate

use latpke_api::{Xof, XofStrength};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{CShake128, CShake128Core, CShake256, CShake256Core, Shake128, Shake256};

/// Library-backed XOF; the default backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemXof;

fn absorb_and_read<H: Update + ExtendableOutput>(mut hasher: H, inputs: &[&[u8]], output: &mut [u8]) {
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize_xof().read(output);
}

impl Xof for SystemXof {
    fn name(&self) -> &'static str {
        "system"
    }

    fn customized_xof_into(
        &self,
        strength: XofStrength,
        inputs: &[&[u8]],
        customization: &[u8],
        output: &mut [u8],
    ) {
        // cSHAKE with empty N and S is defined to be plain SHAKE
        match (strength, customization.is_empty()) {
            (XofStrength::Shake128, true) => {
                absorb_and_read(Shake128::default(), inputs, output)
            }
            (XofStrength::Shake256, true) => {
                absorb_and_read(Shake256::default(), inputs, output)
            }
            (XofStrength::Shake128, false) => absorb_and_read(
                CShake128::from_core(CShake128Core::new(customization)),
                inputs,
                output,
            ),
            (XofStrength::Shake256, false) => absorb_and_read(
                CShake256::from_core(CShake256Core::new(customization)),
                inputs,
                output,
            ),
        }
    }
}
