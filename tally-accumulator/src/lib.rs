#![forbid(unsafe_code)]

//! RSA-style cryptographic accumulator.
//!
//! An accumulator commits an ordered list of byte-string items into a single
//! group element `A = g^{∏ p_i} mod n`, where each `p_i` is a large prime
//! derived deterministically from one item (see [`hash::hash_to_prime`]).
//! Alongside `A`, each item receives a *witness*
//! `w_i = g^{∏_{j≠i} p_j} mod n`; any holder of the public modulus can then
//! check membership with a single exponentiation: `w_i^{p_i} mod n == A`.
//!
//! Two construction paths produce bit-identical output:
//! * [`acc::secretly`] uses the trapdoor (the totient of `n`) and needs O(n)
//!   modular exponentiations in total.
//! * [`acc::publicly`] uses only the modulus and needs O(n²); it serves
//!   parties without the trapdoor and doubles as a cross-check of the
//!   secret path.
//!
//! Every operation is offered in a blocking form and an `async` form; the
//! two return identical results for identical deterministic inputs. The
//! async forms fan per-item prime derivation out over blocking worker tasks
//! and join them before the exponentiation phase; the first failure aborts
//! all outstanding siblings.
//!
//! Protocol parameters — the prime bit length and the public generator — are
//! an explicit [`AccumulatorParams`] value passed into every call. All
//! parties of a protocol instance must agree on identical parameters.

pub mod acc;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;
pub mod prime;
pub mod source;

pub use acc::{
    publicly, publicly_async, secretly, secretly_async, verify, verify_async, Accumulation,
};
pub use error::{AccError, AccResult};
pub use hash::{hash_to_prime, hash_to_prime_async};
pub use keys::{genkeys, genkeys_async, PrivateKey, PublicKey};
pub use params::AccumulatorParams;
pub use source::{ByteSource, DeterministicSource, SecureSource};
