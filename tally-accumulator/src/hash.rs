#![forbid(unsafe_code)]

//! Deterministic item → prime mapping.
//!
//! Each item seeds its own [`DeterministicSource`]; the prime search then
//! consumes that stream. Nothing here depends on time, process state, or
//! external randomness: the same item maps to the same prime across calls,
//! across processes, and across the blocking and async forms.

use num_bigint::BigUint;
use tokio::task;

use crate::error::AccResult;
use crate::params::AccumulatorParams;
use crate::prime::probable_prime;
use crate::source::DeterministicSource;

/// Map an item to its accumulator prime (blocking form).
pub fn hash_to_prime(params: &AccumulatorParams, item: &[u8]) -> AccResult<BigUint> {
    let mut source = DeterministicSource::from_seed(item);
    probable_prime(&mut source, params.prime_bits())
}

/// Map an item to its accumulator prime, offloading the search to a
/// blocking worker. Returns exactly what [`hash_to_prime`] returns.
pub async fn hash_to_prime_async(params: &AccumulatorParams, item: &[u8]) -> AccResult<BigUint> {
    let params = params.clone();
    let item = item.to_vec();
    task::spawn_blocking(move || hash_to_prime(&params, &item)).await?
}
