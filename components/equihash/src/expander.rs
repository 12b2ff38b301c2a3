//! Deterministic expansion of `(seed, nonce, index)` into collision blocks.

use blake2b_simd::{Params as Blake2bParams, State as Blake2bState};
use byteorder::{ByteOrder, LittleEndian};

use crate::params::Params;

/// The number of seed bytes that take part in the hash input.
///
/// Longer seeds are truncated and shorter seeds are zero-padded.
pub const SEED_LENGTH: usize = 16;

pub(crate) const DIGEST_LENGTH: usize = 32;

/// The digest is read as this many little-endian words, one collision block per word.
pub(crate) const DIGEST_WORDS: usize = DIGEST_LENGTH / 4;

/// The collision blocks of a single leaf. Only the first `k + 1` entries are meaningful.
pub(crate) type Blocks = [u32; DIGEST_WORDS];

/// Hash expander for a single `(seed, nonce)` instance.
///
/// The BLAKE2b state is primed with the seed block and the nonce once, and cloned for
/// each index.
#[derive(Clone)]
pub struct Expander {
    params: Params,
    state: Blake2bState,
}

impl Expander {
    /// Prepares the expander for the given `seed` and `nonce`.
    pub fn new(params: Params, seed: &[u8], nonce: u32) -> Self {
        let mut seed_block = [0u8; SEED_LENGTH];
        let used = seed.len().min(SEED_LENGTH);
        seed_block[..used].copy_from_slice(&seed[..used]);

        let mut le_nonce = [0u8; 4];
        LittleEndian::write_u32(&mut le_nonce, nonce);

        let mut state = Blake2bParams::new().hash_length(DIGEST_LENGTH).to_state();
        state.update(&seed_block);
        state.update(&le_nonce);

        Expander { params, state }
    }

    /// The parameters this expander was created for.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Returns the 32-byte digest of the given leaf index.
    pub fn hash(&self, index: u32) -> [u8; DIGEST_LENGTH] {
        let mut lei = [0u8; 4];
        LittleEndian::write_u32(&mut lei, index);

        let mut state = self.state.clone();
        state.update(&lei);

        let mut digest = [0u8; DIGEST_LENGTH];
        digest.copy_from_slice(state.finalize().as_bytes());
        digest
    }

    /// Returns the collision blocks of the given leaf index: block `j` is the top
    /// `collision_bit_length` bits of the `j`-th little-endian digest word.
    pub(crate) fn blocks(&self, index: u32) -> Blocks {
        let digest = self.hash(index);
        let shift = 32 - self.params.collision_bit_length();

        let mut blocks = [0u32; DIGEST_WORDS];
        for (block, word) in blocks
            .iter_mut()
            .zip(digest.chunks_exact(4))
            .take(self.params.collision_blocks())
        {
            *block = LittleEndian::read_u32(word) >> shift;
        }
        blocks
    }
}
