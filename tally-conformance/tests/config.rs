//! Config file → protocol parameters wiring.

use std::io::Write;

use tally_accumulator::{hash_to_prime, AccumulatorParams};
use tally_core::TallyConfig;

#[test]
fn config_exponent_drives_prime_size() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "prime_exponent = 6").unwrap();
    let cfg = TallyConfig::from_file(f.path()).unwrap();

    let params = AccumulatorParams::from_config(&cfg).unwrap();
    assert_eq!(params.prime_bits(), 64);

    let prime = hash_to_prime(&params, b"pewpew").unwrap();
    assert_eq!(prime.bits(), 64);
}

#[test]
fn default_config_matches_default_params() {
    let cfg = TallyConfig::default();
    let from_cfg = AccumulatorParams::from_config(&cfg).unwrap();
    assert_eq!(from_cfg, AccumulatorParams::default());
}
