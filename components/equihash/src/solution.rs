//! Solutions and their 32-bit word framing.

use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};

use crate::{minimal::minimal_from_indices, params::Params, Error};

/// A solution found by the solver: `2^k` leaf indices in proof order, together with the
/// nonce and parameters they are valid for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    params: Params,
    nonce: u32,
    indices: Vec<u32>,
}

impl Solution {
    #[cfg(any(feature = "solver", test))]
    pub(crate) fn new(params: Params, nonce: u32, indices: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len(), params.solution_len());
        Solution {
            params,
            nonce,
            indices,
        }
    }

    /// The parameters the solution was found for.
    pub fn params(&self) -> Params {
        self.params
    }

    /// The nonce the solution was found for.
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// The leaf indices, in proof order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Consumes the solution, returning its leaf indices.
    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }

    /// Returns the proof in the word framing accepted by [`verify`](crate::verify).
    pub fn to_bytes(&self) -> Vec<u8> {
        indices_to_bytes(&self.indices)
    }

    /// Returns the proof in the minimal framing accepted by
    /// [`verify_minimal`](crate::verify_minimal).
    pub fn to_minimal(&self) -> Vec<u8> {
        minimal_from_indices(self.params, &self.indices)
    }
}

/// Writes each index as a little-endian `u32`, in order.
pub fn indices_to_bytes(indices: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0; indices.len() * 4];
    LittleEndian::write_u32_into(indices, &mut bytes);
    bytes
}

/// Reads a proof in the word framing.
///
/// Returns an error if `bytes` is not exactly [`Params::proof_len`] bytes long.
pub fn indices_from_bytes(p: Params, bytes: &[u8]) -> Result<Vec<u32>, Error> {
    if bytes.len() != p.proof_len() {
        return Err(Error::InvalidProofLength {
            expected: p.proof_len(),
            actual: bytes.len(),
        });
    }

    let mut indices = vec![0; p.solution_len()];
    LittleEndian::read_u32_into(bytes, &mut indices);
    Ok(indices)
}
