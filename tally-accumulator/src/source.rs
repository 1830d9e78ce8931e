#![forbid(unsafe_code)]

//! Byte sources feeding the prime search.
//!
//! Two flavours exist: [`SecureSource`] draws from the operating system
//! CSPRNG and backs key generation; [`DeterministicSource`] expands a seed
//! into an unbounded SHA-256 counter-mode stream and backs hash-to-prime,
//! where the same seed must yield the same byte stream forever, across
//! processes and library versions.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::{AccError, AccResult};

/// Producer of raw bytes for prime candidates.
pub trait ByteSource: Send {
    /// Fill `buf` completely or fail; a short read is never exposed.
    fn fill(&mut self, buf: &mut [u8]) -> AccResult<()>;

    /// Derive an independent deterministic child stream by drawing a 32-byte
    /// seed from `self`. Children of a deterministic parent replay exactly;
    /// children of a secure parent are CSPRNG-seeded expansions.
    fn fork(&mut self) -> AccResult<DeterministicSource> {
        let mut seed = [0u8; 32];
        self.fill(&mut seed)?;
        Ok(DeterministicSource::from_seed(&seed))
    }
}

/// Seed-deterministic byte stream: `state = SHA256(seed)`, then successive
/// blocks `SHA256(state || counter)` with a little-endian 64-bit counter.
#[derive(Clone)]
pub struct DeterministicSource {
    state: [u8; 32],
    counter: u64,
    /// Unconsumed tail of the current block.
    pending: Vec<u8>,
}

impl DeterministicSource {
    /// Seed from arbitrary bytes (e.g. an item being hashed to a prime).
    #[must_use]
    pub fn from_seed(seed: &[u8]) -> Self {
        let state: [u8; 32] = Sha256::digest(seed).into();
        Self { state, counter: 0, pending: Vec::new() }
    }

    /// Seed from an integer, for fixed test vectors.
    #[must_use]
    pub fn from_u64(seed: u64) -> Self {
        Self::from_seed(&seed.to_be_bytes())
    }

    fn next_block(&mut self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.state);
        hasher.update(self.counter.to_le_bytes());
        self.counter = self.counter.wrapping_add(1);
        hasher.finalize().into()
    }
}

impl ByteSource for DeterministicSource {
    fn fill(&mut self, buf: &mut [u8]) -> AccResult<()> {
        let mut written = 0;
        while written < buf.len() {
            if self.pending.is_empty() {
                self.pending = self.next_block().to_vec();
            }
            let take = self.pending.len().min(buf.len() - written);
            buf[written..written + take].copy_from_slice(&self.pending[..take]);
            self.pending.drain(..take);
            written += take;
        }
        Ok(())
    }
}

/// Operating-system CSPRNG source for key generation.
#[derive(Clone, Copy, Default)]
pub struct SecureSource;

impl SecureSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for SecureSource {
    fn fill(&mut self, buf: &mut [u8]) -> AccResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| AccError::PrimeGeneration(format!("entropy source failed: {e}")))
    }
}
