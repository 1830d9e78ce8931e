#![forbid(unsafe_code)]

//! Accumulator construction and verification.
//!
//! [`secretly`] builds `acc = g^{∏ p_i mod φ} mod n` and factors each
//! prime's contribution back out of the exponent with its inverse modulo
//! the totient `φ` — one exponentiation per witness. [`publicly`] reaches
//! the same values through chained exponentiation using the modulus alone,
//! at O(n²) total cost. The two are bit-identical for the same key and item
//! order; the conformance suite holds this as a hard invariant.
//!
//! Verification needs only the modulus: `w^{p} mod n == acc`.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use tokio::task::{self, JoinSet};
use tracing::debug;

use crate::error::{AccError, AccResult};
use crate::hash::hash_to_prime;
use crate::keys::{PrivateKey, PublicKey};
use crate::params::AccumulatorParams;

/// Output of one accumulation call. `primes` and `witnesses` are parallel
/// lists aligned with the input item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    pub acc: BigUint,
    pub primes: Vec<BigUint>,
    pub witnesses: Vec<BigUint>,
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = BigInt::from(a.clone());
    let m = BigInt::from(m.clone());
    let ext = a.extended_gcd(&m);
    if !ext.gcd.is_one() {
        return None;
    }
    // x may be negative; normalize into [0, m).
    ext.x.mod_floor(&m).to_biguint()
}

/// Trapdoor construction over already-derived primes.
fn build_secret(key: &PrivateKey, params: &AccumulatorParams, primes: Vec<BigUint>) -> AccResult<Accumulation> {
    let n = &key.n;
    let totient = &key.totient;
    let g = params.generator();

    // Reduce the exponent incrementally to bound its size.
    let mut exp = BigUint::one();
    for prime in &primes {
        exp = (exp * prime) % totient;
    }
    let acc = g.modpow(&exp, n);

    let witnesses = primes
        .iter()
        .map(|prime| {
            let inv = mod_inverse(prime, totient).ok_or(AccError::NoModularInverse)?;
            let e = (inv * &exp) % totient;
            Ok(g.modpow(&e, n))
        })
        .collect::<AccResult<Vec<_>>>()?;

    Ok(Accumulation { acc, primes, witnesses })
}

/// Public construction over already-derived primes: chained exponentiation,
/// no totient involved.
fn build_public(key: &PublicKey, params: &AccumulatorParams, primes: Vec<BigUint>) -> Accumulation {
    let n = &key.n;
    let g = params.generator();

    let acc = primes.iter().fold(g.clone(), |a, prime| a.modpow(prime, n));

    let witnesses = (0..primes.len())
        .map(|i| {
            primes
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(g.clone(), |w, (_, prime)| w.modpow(prime, n))
        })
        .collect();

    Accumulation { acc, primes, witnesses }
}

fn derive_primes_blocking<I: AsRef<[u8]>>(
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Vec<BigUint>> {
    items
        .iter()
        .map(|item| hash_to_prime(params, item.as_ref()))
        .collect()
}

/// Fan per-item prime derivation out over blocking workers and join them
/// all. The first failure aborts every outstanding sibling and is delivered
/// exactly once; no partial list ever escapes.
async fn derive_primes<I: AsRef<[u8]>>(
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Vec<BigUint>> {
    let mut set = JoinSet::new();
    for (idx, item) in items.iter().enumerate() {
        let params = params.clone();
        let bytes = item.as_ref().to_vec();
        set.spawn_blocking(move || (idx, hash_to_prime(&params, &bytes)));
    }

    let mut slots: Vec<Option<BigUint>> = (0..items.len()).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (idx, result) = joined?;
        match result {
            Ok(prime) => slots[idx] = Some(prime),
            Err(e) => {
                set.abort_all();
                return Err(AccError::Aborted(Box::new(e)));
            }
        }
    }

    let mut primes = Vec::with_capacity(slots.len());
    for slot in slots {
        primes.push(slot.ok_or_else(|| {
            AccError::PrimeGeneration("derivation task delivered no result".into())
        })?);
    }
    Ok(primes)
}

/// Accumulate `items` using the trapdoor: O(n) exponentiations in total.
pub fn secretly<I: AsRef<[u8]>>(
    key: &PrivateKey,
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Accumulation> {
    debug!(items = items.len(), "accumulating via trapdoor");
    let primes = derive_primes_blocking(params, items)?;
    build_secret(key, params, primes)
}

/// Async form of [`secretly`]: concurrent prime derivation, then the
/// exponentiation phase on a blocking worker. Bit-identical output.
pub async fn secretly_async<I: AsRef<[u8]>>(
    key: &PrivateKey,
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Accumulation> {
    debug!(items = items.len(), "accumulating via trapdoor (async)");
    let primes = derive_primes(params, items).await?;
    let key = key.clone();
    let params = params.clone();
    task::spawn_blocking(move || build_secret(&key, &params, primes)).await?
}

/// Accumulate `items` using only the modulus: O(n²) exponentiations in
/// total, usable without the trapdoor. Output is bit-identical to
/// [`secretly`] for the same key and item order.
pub fn publicly<I: AsRef<[u8]>>(
    key: &PublicKey,
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Accumulation> {
    debug!(items = items.len(), "accumulating via public path");
    let primes = derive_primes_blocking(params, items)?;
    Ok(build_public(key, params, primes))
}

/// Async form of [`publicly`].
pub async fn publicly_async<I: AsRef<[u8]>>(
    key: &PublicKey,
    params: &AccumulatorParams,
    items: &[I],
) -> AccResult<Accumulation> {
    debug!(items = items.len(), "accumulating via public path (async)");
    let primes = derive_primes(params, items).await?;
    let key = key.clone();
    let params = params.clone();
    task::spawn_blocking(move || Ok(build_public(&key, &params, primes))).await?
}

/// Check `witness` against `acc` for `item`. A mismatch is a normal
/// `Ok(false)`; only hash-to-prime failures surface as errors.
pub fn verify(
    key: &PublicKey,
    params: &AccumulatorParams,
    acc: &BigUint,
    witness: &BigUint,
    item: &[u8],
) -> AccResult<bool> {
    let prime = hash_to_prime(params, item)?;
    Ok(&witness.modpow(&prime, key.n()) == acc)
}

/// Async form of [`verify`].
pub async fn verify_async(
    key: &PublicKey,
    params: &AccumulatorParams,
    acc: &BigUint,
    witness: &BigUint,
    item: &[u8],
) -> AccResult<bool> {
    let key = key.clone();
    let params = params.clone();
    let acc = acc.clone();
    let witness = witness.clone();
    let item = item.to_vec();
    task::spawn_blocking(move || verify(&key, &params, &acc, &witness, &item)).await?
}
