use std::collections::HashSet;

use tally_accumulator::hash_to_prime;
use tally_conformance::{scenario_params, SCENARIO_ITEMS};

#[test]
fn repeated_calls_return_the_same_prime() {
    let params = scenario_params();
    let first = hash_to_prime(&params, b"pewpewpew").unwrap();
    for _ in 0..10 {
        assert_eq!(hash_to_prime(&params, b"pewpewpew").unwrap(), first);
    }
}

#[test]
fn scenario_items_map_to_distinct_primes() {
    let params = scenario_params();
    let primes: HashSet<_> = SCENARIO_ITEMS
        .iter()
        .map(|item| hash_to_prime(&params, item).unwrap())
        .collect();
    assert_eq!(primes.len(), SCENARIO_ITEMS.len());
}

#[test]
fn prime_has_requested_bit_length() {
    let params = scenario_params();
    for item in SCENARIO_ITEMS {
        let prime = hash_to_prime(&params, item).unwrap();
        assert_eq!(prime.bits(), u64::from(params.prime_bits()));
    }
}

#[test]
fn empty_item_is_a_valid_seed() {
    let params = scenario_params();
    let a = hash_to_prime(&params, b"").unwrap();
    let b = hash_to_prime(&params, b"").unwrap();
    assert_eq!(a, b);
}
