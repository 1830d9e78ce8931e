#![forbid(unsafe_code)]

//! Error types for accumulator operations.

use thiserror::Error;

/// Errors that can occur during accumulator construction and verification.
///
/// A failed membership check is *not* an error: [`crate::acc::verify`]
/// returns `Ok(false)` for any legitimate mismatch. Only failures of the
/// underlying prime search, entropy source, or worker tasks surface here.
#[derive(Debug, Error)]
pub enum AccError {
    /// The prime search returned a value off its bit-length contract.
    #[error("prime search returned a {got}-bit value, expected {expected} bits")]
    InvalidPrime { expected: u32, got: u64 },

    /// The prime search or its byte source failed outright.
    #[error("prime generation failed: {0}")]
    PrimeGeneration(String),

    /// An accumulated prime is not coprime to the totient, so its
    /// contribution cannot be factored out of the secret-path witness.
    #[error("accumulated prime has no inverse modulo the totient")]
    NoModularInverse,

    /// One of several concurrent derivations failed; all siblings were
    /// aborted and no partial result was produced.
    #[error("concurrent derivation aborted: {0}")]
    Aborted(#[source] Box<AccError>),

    /// A worker task panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Out-of-range protocol parameters.
    #[error("invalid protocol parameters: {0}")]
    InvalidParams(String),
}

/// Convenient alias for results in this crate.
pub type AccResult<T> = Result<T, AccError>;
