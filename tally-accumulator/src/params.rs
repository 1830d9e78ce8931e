#![forbid(unsafe_code)]

//! Protocol parameters shared by every party of an accumulator instance.

use num_bigint::BigUint;
use num_traits::One;
use tally_core::TallyConfig;

use crate::error::{AccError, AccResult};

/// Inclusive bounds for the prime-size exponent. These match the config
/// layer's bounds in `tally-core`.
pub const MIN_EXPONENT: u32 = 4;
pub const MAX_EXPONENT: u32 = 12;

/// Default exponent: 512-bit primes, generator 513.
pub const DEFAULT_EXPONENT: u32 = 9;

/// Public parameters for an accumulator protocol instance.
///
/// Derived once from a single exponent `k`: primes are `2^k` bits long and
/// the public generator is `g = 2^k + 1`. `g` is not secret, but every
/// party must hold the same value; treat this struct as a protocol
/// parameter, never a per-call tunable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulatorParams {
    prime_bits: u32,
    generator: BigUint,
}

impl AccumulatorParams {
    /// Build parameters from the size exponent `k` (`prime_bits = 2^k`,
    /// `generator = 2^k + 1`).
    pub fn from_exponent(k: u32) -> AccResult<Self> {
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&k) {
            return Err(AccError::InvalidParams(format!(
                "exponent {k} outside {MIN_EXPONENT}..={MAX_EXPONENT}"
            )));
        }
        let generator = (BigUint::one() << k) + BigUint::one();
        Ok(Self { prime_bits: 1 << k, generator })
    }

    /// Build parameters from a loaded configuration file.
    pub fn from_config(cfg: &TallyConfig) -> AccResult<Self> {
        Self::from_exponent(cfg.prime_exponent)
    }

    /// Bit length requested from every prime search under these parameters.
    #[must_use]
    pub fn prime_bits(&self) -> u32 {
        self.prime_bits
    }

    /// The public base `g`.
    #[must_use]
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }
}

impl Default for AccumulatorParams {
    fn default() -> Self {
        // DEFAULT_EXPONENT is inside the validated range.
        Self::from_exponent(DEFAULT_EXPONENT).unwrap()
    }
}
