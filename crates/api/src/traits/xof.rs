//! Trait definition for the extendable-output capability

/// Security strength of a SHAKE-family call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XofStrength {
    Shake128,
    Shake256,
}

impl XofStrength {
    /// SHAKE128 for `kappa_bytes <= 16`, SHAKE256 above.
    pub fn for_kappa(kappa_bytes: usize) -> Self {
        if kappa_bytes > 16 {
            Self::Shake256
        } else {
            Self::Shake128
        }
    }

    /// Sponge rate in bytes.
    pub fn rate(self) -> usize {
        match self {
            Self::Shake128 => 168,
            Self::Shake256 => 136,
        }
    }
}

/// Extendable-output function, plain and customized (cSHAKE).
///
/// Every backend must produce byte-identical output for identical calls.
/// Calls are infallible: a backend that cannot run is rejected when it is
/// selected, never per call.
pub trait Xof {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Absorb the concatenation of `inputs` under `customization` and fill
    /// `output`. An empty customization is plain SHAKE.
    fn customized_xof_into(
        &self,
        strength: XofStrength,
        inputs: &[&[u8]],
        customization: &[u8],
        output: &mut [u8],
    );

    fn xof_into(&self, strength: XofStrength, inputs: &[&[u8]], output: &mut [u8]) {
        self.customized_xof_into(strength, inputs, &[], output)
    }

    fn xof(&self, strength: XofStrength, output_len: usize, input: &[u8]) -> Vec<u8> {
        let mut output = vec![0u8; output_len];
        self.xof_into(strength, &[input], &mut output);
        output
    }

    fn customized_xof(
        &self,
        strength: XofStrength,
        output_len: usize,
        input: &[u8],
        customization: &[u8],
    ) -> Vec<u8> {
        let mut output = vec![0u8; output_len];
        self.customized_xof_into(strength, &[input], customization, &mut output);
        output
    }
}
