//! Fixtures shared by the latpke integration tests and benchmarks

use std::sync::Once;

use latpke_params::ParameterSet;
use latpke_pke::builtin_registry;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing_subscriber::EnvFilter;

pub mod toy;

pub use toy::ToyCpaPke;

static TRACING: Once = Once::new();

/// Route library spans to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Every built-in set usable for hybrid encryption.
pub fn encrypt_sets() -> Vec<&'static ParameterSet> {
    builtin_registry()
        .map(|registry| registry.iter().filter(|set| set.is_encrypt()).collect())
        .unwrap_or_default()
}

/// Message lengths exercised by the round-trip suites.
pub const MESSAGE_LENGTHS: [usize; 4] = [0, 1, 37, 4096];
