//! End-to-end hybrid encryption over the FO KEM and AES-GCM

use latpke_algorithms::XofBackendKind;
use latpke_api::{Error, SecretKey};
use latpke_kem::FoKem;
use latpke_pke::{HybridPke, PkeConfig};
use latpke_symmetric::AesGcmDem;
use latpke_tests::{encrypt_sets, init_tracing, seeded_rng, ToyCpaPke, MESSAGE_LENGTHS};
use rand::RngCore;

type Scheme = HybridPke<FoKem<ToyCpaPke>, AesGcmDem>;

fn scheme(name: &str, backend: XofBackendKind) -> Scheme {
    let config = PkeConfig::new(name).with_xof_backend(backend).validate().unwrap();
    config.hybrid(ToyCpaPke::new(config.xof())).unwrap()
}

fn message(len: usize, seed: u64) -> Vec<u8> {
    let mut out = vec![0u8; len];
    seeded_rng(seed).fill_bytes(&mut out);
    out
}

#[test]
fn test_round_trip_every_encrypt_set() {
    init_tracing();
    let sets = encrypt_sets();
    assert_eq!(sets.len(), 10);

    for params in sets {
        for backend in [XofBackendKind::System, XofBackendKind::Sponge] {
            let pke = scheme(params.name, backend);
            let mut rng = seeded_rng(42);
            let (pk, sk) = pke.keypair(&mut rng).unwrap();
            assert_eq!(pk.len(), params.public_key_bytes);
            assert_eq!(sk.len(), params.secret_key_bytes);

            for len in MESSAGE_LENGTHS {
                let m = message(len, len as u64);
                let ct = pke.encrypt(&pk, &m, &mut rng).unwrap();
                assert_eq!(
                    ct.len(),
                    params.kem_ciphertext_bytes + params.shared_secret_bytes + len + 16,
                    "{} with {} byte message",
                    params.name,
                    len
                );
                assert_eq!(pke.decrypt(&sk, &ct).unwrap(), m, "{}", params.name);
            }
        }
    }
}

#[test]
fn test_short_ciphertext_is_malformed() {
    let pke = scheme("R5ND_1PKE_5c", XofBackendKind::System);
    let mut rng = seeded_rng(1);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let ct = pke.encrypt(&pk, b"", &mut rng).unwrap();
    let minimum = pke.min_ciphertext_len();
    assert_eq!(ct.len(), minimum);

    for len in [0, pke.c1_len(), minimum - 1] {
        assert_eq!(
            pke.decrypt(&sk, &ct[..len]),
            Err(Error::MalformedCiphertext { minimum, actual: len })
        );
    }
}

#[test]
fn test_bit_flips_fail_authentication() {
    let pke = scheme("R5ND_3PKE_0c", XofBackendKind::System);
    let mut rng = seeded_rng(2);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let ct = pke.encrypt(&pk, b"the quick brown fox", &mut rng).unwrap();

    let positions = [0, pke.c1_len() - 1, pke.c1_len(), ct.len() - 17, ct.len() - 1];
    for index in positions {
        for bit in [0, 7] {
            let mut tampered = ct.clone();
            tampered[index] ^= 1 << bit;
            assert_eq!(
                pke.decrypt(&sk, &tampered),
                Err(Error::AuthenticationFailure),
                "flip at byte {index} bit {bit}"
            );
        }
    }
}

#[test]
fn test_appended_byte_fails_authentication() {
    let pke = scheme("R5ND_5PKE_5c", XofBackendKind::Sponge);
    let mut rng = seeded_rng(3);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let mut ct = pke.encrypt(&pk, b"payload", &mut rng).unwrap();
    ct.push(0);
    assert_eq!(pke.decrypt(&sk, &ct), Err(Error::AuthenticationFailure));
}

#[test]
fn test_wrong_secret_key_fails_authentication() {
    let pke = scheme("R5ND_1PKE_0c", XofBackendKind::System);
    let mut rng = seeded_rng(4);
    let (pk, _) = pke.keypair(&mut rng).unwrap();
    let (_, other_sk) = pke.keypair(&mut rng).unwrap();

    let ct = pke.encrypt(&pk, b"for someone else", &mut rng).unwrap();
    assert_eq!(pke.decrypt(&other_sk, &ct), Err(Error::AuthenticationFailure));
}

#[test]
fn test_mis_sized_secret_key_fails_authentication() {
    let pke = scheme("R5ND_1PKE_0c", XofBackendKind::System);
    let mut rng = seeded_rng(5);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let ct = pke.encrypt(&pk, b"hello", &mut rng).unwrap();

    let truncated = SecretKey::from_slice(&sk.as_ref()[1..], sk.len() - 1).unwrap();
    assert_eq!(pke.decrypt(&truncated, &ct), Err(Error::AuthenticationFailure));
}

#[test]
fn test_encryption_is_randomized() {
    let pke = scheme("R5ND_1PKE_0c", XofBackendKind::System);
    let mut rng = seeded_rng(6);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();

    let a = pke.encrypt(&pk, b"same", &mut rng).unwrap();
    let b = pke.encrypt(&pk, b"same", &mut rng).unwrap();
    assert_ne!(a, b);
    assert_eq!(pke.decrypt(&sk, &a).unwrap(), pke.decrypt(&sk, &b).unwrap());
}

#[test]
fn test_backends_interoperate() {
    let system = scheme("R5N1_3PKE_0c", XofBackendKind::System);
    let sponge = scheme("R5N1_3PKE_0c", XofBackendKind::Sponge);

    let (pk_a, sk_a) = system.keypair(&mut seeded_rng(7)).unwrap();
    let (pk_b, sk_b) = sponge.keypair(&mut seeded_rng(7)).unwrap();
    assert_eq!(pk_a, pk_b);
    assert_eq!(sk_a, sk_b);

    let m = message(500, 8);
    let ct_a = system.encrypt(&pk_a, &m, &mut seeded_rng(9)).unwrap();
    let ct_b = sponge.encrypt(&pk_b, &m, &mut seeded_rng(9)).unwrap();
    assert_eq!(ct_a, ct_b);
    assert_eq!(sponge.decrypt(&sk_b, &ct_a).unwrap(), m);
}
