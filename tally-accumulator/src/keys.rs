#![forbid(unsafe_code)]

//! Trapdoor key generation.
//!
//! A key pair is two independent large primes `p`, `q` with modulus
//! `n = p·q` and totient `(p-1)(q-1)`. The totient is the trapdoor: it
//! enables linear-time accumulation and must never reach a verifier. A
//! candidate pair is valid only when the public generator is coprime to the
//! totient; invalid pairs are discarded and redrawn, an unbounded
//! rejection-sampling loop that terminates with overwhelming probability.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use tokio::task::{self, JoinError};
use tracing::debug;

use crate::error::{AccError, AccResult};
use crate::params::AccumulatorParams;
use crate::prime::probable_prime;
use crate::source::ByteSource;

/// Trapdoor key: owned exclusively by the issuer.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) n: BigUint,
    pub(crate) totient: BigUint,
}

impl PrivateKey {
    /// The public modulus.
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The disclosable subset of this key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey { n: self.n.clone() }
    }
}

// p, q and the totient are the trapdoor; keep them out of logs.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .field("p", &"<redacted>")
            .field("q", &"<redacted>")
            .field("totient", &"<redacted>")
            .finish()
    }
}

/// Public key: just the modulus. Safe to disclose; sufficient for the
/// public accumulation path and for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
}

impl PublicKey {
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(key: &PrivateKey) -> Self {
        key.public_key()
    }
}

/// Turn a drawn pair into a key, or reject it when the generator shares a
/// factor with the totient.
fn assemble(params: &AccumulatorParams, p: BigUint, q: BigUint) -> Option<PrivateKey> {
    let totient = (&p - 1u32) * (&q - 1u32);
    if params.generator().gcd(&totient).is_one() {
        let n = &p * &q;
        Some(PrivateKey { p, q, n, totient })
    } else {
        None
    }
}

/// Generate a trapdoor key pair from `source` (blocking form).
///
/// The two prime draws consume independent child streams forked from
/// `source` in a fixed order, so a deterministic source replays to the same
/// key every time.
pub fn genkeys(params: &AccumulatorParams, source: &mut impl ByteSource) -> AccResult<PrivateKey> {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut p_stream = source.fork()?;
        let mut q_stream = source.fork()?;
        let p = probable_prime(&mut p_stream, params.prime_bits())?;
        let q = probable_prime(&mut q_stream, params.prime_bits())?;
        if let Some(key) = assemble(params, p, q) {
            debug!(attempts, "key pair accepted");
            return Ok(key);
        }
        debug!(attempts, "generator not coprime to totient, redrawing pair");
    }
}

fn joined_prime(joined: Result<AccResult<BigUint>, JoinError>) -> AccResult<BigUint> {
    match joined {
        Ok(inner) => inner,
        Err(e) => Err(AccError::Join(e)),
    }
}

/// Generate a trapdoor key pair, searching the two primes on concurrent
/// blocking workers joined before the totient/validity step. Bit-identical
/// to [`genkeys`] for the same deterministic source.
pub async fn genkeys_async(
    params: &AccumulatorParams,
    source: &mut impl ByteSource,
) -> AccResult<PrivateKey> {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        // Fork order matches the blocking form so deterministic seeds agree.
        let mut p_stream = source.fork()?;
        let mut q_stream = source.fork()?;
        let bits = params.prime_bits();
        let p_task = task::spawn_blocking(move || probable_prime(&mut p_stream, bits));
        let q_task = task::spawn_blocking(move || probable_prime(&mut q_stream, bits));
        let (p_res, q_res) = tokio::join!(p_task, q_task);
        let (p, q) = match (joined_prime(p_res), joined_prime(q_res)) {
            (Ok(p), Ok(q)) => (p, q),
            (Err(e), _) | (_, Err(e)) => return Err(AccError::Aborted(Box::new(e))),
        };
        if let Some(key) = assemble(params, p, q) {
            debug!(attempts, "key pair accepted");
            return Ok(key);
        }
        debug!(attempts, "generator not coprime to totient, redrawing pair");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DeterministicSource;

    fn test_params() -> AccumulatorParams {
        AccumulatorParams::from_exponent(6).unwrap()
    }

    #[test]
    fn key_invariants_hold() {
        let params = test_params();
        let mut source = DeterministicSource::from_u64(5);
        let key = genkeys(&params, &mut source).unwrap();
        assert_eq!(key.n, &key.p * &key.q);
        assert_eq!(key.totient, (&key.p - 1u32) * (&key.q - 1u32));
        assert!(params.generator().gcd(&key.totient).is_one());
        assert_eq!(key.public_key().n(), key.n());
    }

    #[test]
    fn deterministic_source_replays_key() {
        let params = test_params();
        let k1 = genkeys(&params, &mut DeterministicSource::from_u64(5)).unwrap();
        let k2 = genkeys(&params, &mut DeterministicSource::from_u64(5)).unwrap();
        assert_eq!(k1.n, k2.n);
        assert_eq!(k1.totient, k2.totient);
    }

    #[tokio::test]
    async fn async_form_matches_blocking() {
        let params = test_params();
        let blocking = genkeys(&params, &mut DeterministicSource::from_u64(5)).unwrap();
        let suspended = genkeys_async(&params, &mut DeterministicSource::from_u64(5))
            .await
            .unwrap();
        assert_eq!(blocking.n, suspended.n);
    }

    #[test]
    fn debug_redacts_trapdoor() {
        let params = test_params();
        let key = genkeys(&params, &mut DeterministicSource::from_u64(5)).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&key.totient.to_string()));
    }
}
