#![forbid(unsafe_code)]

//! Probable-prime search over a [`ByteSource`].
//!
//! Rejection sampling: draw a candidate of the requested bit length from the
//! source, force the top bit (exact length) and low bit (odd), and test with
//! Miller–Rabin. The search consumes the source strictly in candidate order,
//! so a deterministic source yields a deterministic prime.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{AccError, AccResult};
use crate::source::ByteSource;

/// Search `source` for a probable prime of exactly `bits` bits.
pub fn probable_prime(source: &mut impl ByteSource, bits: u32) -> AccResult<BigUint> {
    if bits < 2 {
        return Err(AccError::PrimeGeneration(format!(
            "cannot search for a {bits}-bit prime"
        )));
    }
    let byte_len = ((bits as usize) + 7) / 8;
    let mut bytes = vec![0u8; byte_len];
    let mut rejected = 0u64;
    loop {
        source.fill(&mut bytes)?;
        let mut candidate = BigUint::from_bytes_be(&bytes);
        // Exact bit length and oddness.
        candidate.set_bit(u64::from(bits) - 1, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate) {
            if candidate.bits() != u64::from(bits) {
                return Err(AccError::InvalidPrime { expected: bits, got: candidate.bits() });
            }
            trace!(bits, rejected, "probable prime found");
            return Ok(candidate);
        }
        rejected += 1;
    }
}

/// Miller-Rabin primality test. The fixed base set is a proof of primality
/// below 2^512 and a strong probabilistic test above it.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if *n == BigUint::from(2u8) {
        return true;
    }
    if n.is_zero() || n.is_one() || n.is_even() {
        return false;
    }
    // small prime trial division (fast path)
    const SMALL: [u64; 8] = [3, 5, 7, 11, 13, 17, 19, 23];
    for p in SMALL {
        if (n % p).is_zero() {
            return *n == BigUint::from(p);
        }
    }
    // deterministic MR bases for <2^512 per https://miller-rabin.appspot.com/
    const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    for a in BASES {
        if !miller_rabin(n, a) {
            return false;
        }
    }
    true
}

fn miller_rabin(n: &BigUint, a: u64) -> bool {
    let a = BigUint::from(a);
    let one = BigUint::one();
    let nm1 = n - &one;
    // write n-1 = d * 2^s with d odd
    let mut d = nm1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut x = a.modpow(&d, n);
    if x == one || x == nm1 {
        return true;
    }
    for _ in 1..s {
        x = x.modpow(&BigUint::from(2u8), n);
        if x == nm1 {
            return true;
        }
    }
    false
}
