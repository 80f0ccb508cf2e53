//! Status-code behaviour of the byte-level API

use latpke_algorithms::XofBackendKind;
use latpke_api::Error;
use latpke_kem::FoKem;
use latpke_pke::{Facade, PkeConfig};
use latpke_symmetric::AesGcmDem;
use latpke_tests::{init_tracing, seeded_rng, ToyCpaPke};
use rand_chacha::ChaChaRng;

const MALFORMED: i32 = -3;
const AUTH_FAILED: i32 = -4;
const INVALID_LENGTH: i32 = -7;

fn facade(name: &str) -> Facade<FoKem<ToyCpaPke>, AesGcmDem, ChaChaRng> {
    init_tracing();
    let config = PkeConfig::new(name).validate().unwrap();
    config.facade(ToyCpaPke::new(config.xof()), seeded_rng(42)).unwrap()
}

fn keypair(api: &mut Facade<FoKem<ToyCpaPke>, AesGcmDem, ChaChaRng>) -> (Vec<u8>, Vec<u8>) {
    let mut pk = vec![0u8; api.crypto_publickeybytes()];
    let mut sk = vec![0u8; api.crypto_secretkeybytes()];
    assert_eq!(api.crypto_encrypt_keypair(&mut pk, &mut sk), 0);
    (pk, sk)
}

#[test]
fn test_status_codes_match_error_taxonomy() {
    assert_eq!(Error::MalformedCiphertext { minimum: 1, actual: 0 }.status_code(), MALFORMED);
    assert_eq!(Error::AuthenticationFailure.status_code(), AUTH_FAILED);
    assert_eq!(
        Error::InvalidLength { context: "x", expected: 1, actual: 0 }.status_code(),
        INVALID_LENGTH
    );
}

#[test]
fn test_sizes_follow_parameter_set() {
    let api = facade("R5ND_1PKE_0c");
    assert_eq!(api.crypto_publickeybytes(), 676);
    assert_eq!(api.crypto_secretkeybytes(), 708);
    assert_eq!(api.crypto_bytes(), 756);
}

#[test]
fn test_round_trip() {
    let mut api = facade("R5ND_3PKE_5c");
    let (pk, sk) = keypair(&mut api);

    let message = b"facade message".to_vec();
    let mut ct = Vec::new();
    assert_eq!(api.crypto_encrypt(&mut ct, &message, &pk), 0);
    assert_eq!(ct.len(), api.crypto_bytes() + message.len());

    let mut opened = Vec::new();
    assert_eq!(api.crypto_encrypt_open(&mut opened, &ct, &sk), 0);
    assert_eq!(opened, message);
}

#[test]
fn test_keypair_rejects_wrong_buffers() {
    let mut api = facade("R5ND_1PKE_0c");
    let mut pk = vec![0u8; api.crypto_publickeybytes() - 1];
    let mut sk = vec![0u8; api.crypto_secretkeybytes()];
    assert_eq!(api.crypto_encrypt_keypair(&mut pk, &mut sk), INVALID_LENGTH);
    assert!(sk.iter().all(|&b| b == 0));

    let mut pk = vec![0u8; api.crypto_publickeybytes()];
    let mut sk = vec![0u8; api.crypto_secretkeybytes() + 1];
    assert_eq!(api.crypto_encrypt_keypair(&mut pk, &mut sk), INVALID_LENGTH);
}

#[test]
fn test_encrypt_rejects_wrong_public_key_size() {
    let mut api = facade("R5ND_1PKE_0c");
    let (pk, _) = keypair(&mut api);
    let mut ct = vec![0xFF; 3];
    assert_eq!(api.crypto_encrypt(&mut ct, b"m", &pk[1..]), INVALID_LENGTH);
    assert!(ct.is_empty());
}

#[test]
fn test_open_failures() {
    let mut api = facade("R5ND_5PKE_0c");
    let (pk, sk) = keypair(&mut api);
    let mut ct = Vec::new();
    assert_eq!(api.crypto_encrypt(&mut ct, b"secret", &pk), 0);

    let mut m = Vec::new();
    assert_eq!(api.crypto_encrypt_open(&mut m, &ct[..api.crypto_bytes() - 1], &sk), MALFORMED);

    let mut tampered = ct.clone();
    tampered[api.crypto_bytes()] ^= 0x40;
    assert_eq!(api.crypto_encrypt_open(&mut m, &tampered, &sk), AUTH_FAILED);
    assert!(m.is_empty());

    assert_eq!(api.crypto_encrypt_open(&mut m, &ct, &sk[..10]), INVALID_LENGTH);
}

#[test]
fn test_os_rng_facade() {
    let config = PkeConfig::new("R5ND_1PKE_5c")
        .with_xof_backend(XofBackendKind::Sponge)
        .validate()
        .unwrap();
    let mut api = Facade::with_os_rng(config.hybrid(ToyCpaPke::new(config.xof())).unwrap());

    let mut pk = vec![0u8; api.crypto_publickeybytes()];
    let mut sk = vec![0u8; api.crypto_secretkeybytes()];
    assert_eq!(api.crypto_encrypt_keypair(&mut pk, &mut sk), 0);

    let mut ct = Vec::new();
    let mut m = Vec::new();
    assert_eq!(api.crypto_encrypt(&mut ct, b"", &pk), 0);
    assert_eq!(api.crypto_encrypt_open(&mut m, &ct, &sk), 0);
    assert!(m.is_empty());
}
