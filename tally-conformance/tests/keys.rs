use num_bigint::BigUint;
use tally_accumulator::{genkeys, DeterministicSource, SecureSource};
use tally_conformance::{fast_params, scenario_params};

#[test]
fn secure_source_yields_valid_keys() {
    let params = fast_params();
    let key = genkeys(&params, &mut SecureSource::new()).unwrap();
    // modulus of two k-bit primes is 2k or 2k-1 bits
    let bits = u64::from(params.prime_bits());
    assert!(key.n().bits() >= 2 * bits - 1);
    assert!(key.n().bits() <= 2 * bits);
}

#[test]
fn deterministic_keys_replay() {
    let params = scenario_params();
    let a = genkeys(&params, &mut DeterministicSource::from_u64(42)).unwrap();
    let b = genkeys(&params, &mut DeterministicSource::from_u64(42)).unwrap();
    assert_eq!(a.n(), b.n());
}

#[test]
fn different_seeds_give_different_moduli() {
    let params = scenario_params();
    let a = genkeys(&params, &mut DeterministicSource::from_u64(1)).unwrap();
    let b = genkeys(&params, &mut DeterministicSource::from_u64(2)).unwrap();
    assert_ne!(a.n(), b.n());
}

#[test]
fn public_key_carries_only_the_modulus() {
    let params = scenario_params();
    let key = genkeys(&params, &mut DeterministicSource::from_u64(7)).unwrap();
    let public = key.public_key();
    assert_eq!(public.n(), key.n());
    assert!(*public.n() > BigUint::from(0u32));
}
