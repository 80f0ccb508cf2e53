//! Property-based round trips through the full scheme

use latpke_algorithms::XofBackendKind;
use latpke_api::Error;
use latpke_pke::PkeConfig;
use latpke_tests::{seeded_rng, ToyCpaPke};
use proptest::prelude::*;

const SETS: [&str; 4] = ["R5ND_1PKE_0c", "R5ND_3PKE_5c", "R5ND_5PKE_0c", "R5N1_1PKE_0c"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_round_trip(
        message in prop::collection::vec(any::<u8>(), 0..1024),
        set in 0usize..SETS.len(),
        sponge in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let backend = if sponge { XofBackendKind::Sponge } else { XofBackendKind::System };
        let config = PkeConfig::new(SETS[set]).with_xof_backend(backend).validate().unwrap();
        let pke = config.hybrid(ToyCpaPke::new(config.xof())).unwrap();
        let mut rng = seeded_rng(seed);

        let (pk, sk) = pke.keypair(&mut rng).unwrap();
        let ct = pke.encrypt(&pk, &message, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), pke.ciphertext_len(message.len()));
        prop_assert_eq!(pke.decrypt(&sk, &ct).unwrap(), message);
    }

    #[test]
    fn prop_single_flip_is_rejected(
        message in prop::collection::vec(any::<u8>(), 1..256),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let config = PkeConfig::new("R5ND_1PKE_5c").validate().unwrap();
        let pke = config.hybrid(ToyCpaPke::new(config.xof())).unwrap();
        let mut rng = seeded_rng(5);

        let (pk, sk) = pke.keypair(&mut rng).unwrap();
        let mut ct = pke.encrypt(&pk, &message, &mut rng).unwrap();
        let index = position.index(ct.len());
        ct[index] ^= 1 << bit;
        prop_assert_eq!(pke.decrypt(&sk, &ct), Err(Error::AuthenticationFailure));
    }
}
