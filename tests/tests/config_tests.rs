//! Startup configuration: file format and validation

use latpke_algorithms::XofBackendKind;
use latpke_api::Error;
use latpke_pke::{builtin_registry, PkeConfig};
use latpke_tests::{init_tracing, seeded_rng, ToyCpaPke};

#[test]
fn test_json_config_drives_the_scheme() {
    init_tracing();
    let raw = r#"{ "parameter_set": "R5N1_1PKE_0c", "xof_backend": "sponge" }"#;
    let config: PkeConfig = serde_json::from_str(raw).unwrap();
    let validated = config.validate().unwrap();
    assert_eq!(validated.params().name, "R5N1_1PKE_0c");
    assert_eq!(validated.xof().kind(), XofBackendKind::Sponge);

    let pke = validated.hybrid(ToyCpaPke::new(validated.xof())).unwrap();
    let mut rng = seeded_rng(11);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let ct = pke.encrypt(&pk, b"configured", &mut rng).unwrap();
    assert_eq!(pke.decrypt(&sk, &ct).unwrap(), b"configured");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PkeConfig::new("R5ND_5PKE_5c").with_xof_backend(XofBackendKind::Sponge);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"parameter_set":"R5ND_5PKE_5c","xof_backend":"sponge"}"#);
    assert_eq!(serde_json::from_str::<PkeConfig>(&json).unwrap(), config);
}

#[test]
fn test_unknown_backend_is_rejected_at_parse_time() {
    let raw = r#"{ "parameter_set": "R5ND_1PKE_0c", "xof_backend": "hardware" }"#;
    assert!(serde_json::from_str::<PkeConfig>(raw).is_err());
}

#[test]
fn test_every_kem_only_set_is_rejected() {
    let registry = builtin_registry().unwrap();
    let mut rejected = 0;
    for params in registry.iter().filter(|set| !set.is_encrypt()) {
        let err = PkeConfig::new(params.name).validate().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "{}", params.name);
        assert!(err.is_fatal());
        rejected += 1;
    }
    assert_eq!(rejected, 71);
}

#[test]
fn test_every_encrypt_set_validates() {
    let registry = builtin_registry().unwrap();
    for params in registry.iter().filter(|set| set.is_encrypt()) {
        for backend in [XofBackendKind::System, XofBackendKind::Sponge] {
            let config = PkeConfig::new(params.name).with_xof_backend(backend).validate().unwrap();
            assert_eq!(config.params(), params);
        }
    }
}

#[test]
fn test_missing_name_is_configuration_error() {
    let err = PkeConfig::new("R5ND_1PKE_0d").validate().unwrap_err();
    assert_eq!(err.status_code(), -1);
    assert!(err.to_string().contains("not found"));
}
