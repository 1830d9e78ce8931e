#![forbid(unsafe_code)]

//! Shared fixtures for the conformance suite. Tests use small exponents so
//! key generation and accumulation stay fast; the arithmetic is identical
//! at every size.

use tally_accumulator::{genkeys, AccumulatorParams, DeterministicSource, PrivateKey};

/// Item list exercised throughout the suite.
pub const SCENARIO_ITEMS: [&[u8]; 5] = [b"pewpew", b"bangbang", b"ansuz", b"borb", b"blammo"];

/// Seed for the fixed scenario key.
pub const SCENARIO_SEED: u64 = 5;

/// 64-bit-prime parameters for scenario tests.
pub fn scenario_params() -> AccumulatorParams {
    AccumulatorParams::from_exponent(6).expect("exponent 6 is in range")
}

/// 32-bit-prime parameters for property tests that regenerate many values.
pub fn fast_params() -> AccumulatorParams {
    AccumulatorParams::from_exponent(5).expect("exponent 5 is in range")
}

/// Deterministic key for the given parameters, replayable across runs.
pub fn fixed_key(params: &AccumulatorParams) -> PrivateKey {
    genkeys(params, &mut DeterministicSource::from_u64(SCENARIO_SEED))
        .expect("deterministic key generation")
}
