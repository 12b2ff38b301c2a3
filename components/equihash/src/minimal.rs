use alloc::vec::Vec;

use crate::{params::Params, Error};

/// Packs `indices` into the minimal encoding: each index is written in
/// `index_bit_length` bits, most significant bit first, and the final byte is padded
/// with zero bits.
///
/// Only the low `index_bit_length` bits of each index are written; solutions produced by
/// the solver never carry wider indices.
pub fn minimal_from_indices(p: Params, indices: &[u32]) -> Vec<u8> {
    let bit_len = p.index_bit_length();
    let mut vout = Vec::with_capacity((indices.len() * bit_len + 7) / 8);
    let bit_len_mask: u64 = (1 << bit_len) - 1;

    // The acc_bits least-significant bits of acc_value represent a bit sequence
    // in big-endian order.
    let mut acc_bits = 0;
    let mut acc_value: u64 = 0;

    for i in indices {
        acc_value = (acc_value << bit_len) | (u64::from(*i) & bit_len_mask);
        acc_bits += bit_len;

        while acc_bits >= 8 {
            acc_bits -= 8;
            vout.push((acc_value >> acc_bits) as u8);
        }
    }

    if acc_bits > 0 {
        vout.push((acc_value << (8 - acc_bits)) as u8);
    }

    vout
}

/// Unpacks the minimal encoding of a solution.
///
/// Returns an error if `minimal` is not exactly [`Params::minimal_len`] bytes long.
/// Padding bits in the final byte are ignored.
pub fn indices_from_minimal(p: Params, minimal: &[u8]) -> Result<Vec<u32>, Error> {
    if minimal.len() != p.minimal_len() {
        return Err(Error::InvalidProofLength {
            expected: p.minimal_len(),
            actual: minimal.len(),
        });
    }

    let bit_len = p.index_bit_length();
    let bit_len_mask: u64 = (1 << bit_len) - 1;
    let mut ret = Vec::with_capacity(p.solution_len());

    let mut acc_bits = 0;
    let mut acc_value: u64 = 0;

    for b in minimal {
        acc_value = (acc_value << 8) | u64::from(*b);
        acc_bits += 8;

        // Indices narrower than a byte can complete more than once per byte.
        while acc_bits >= bit_len && ret.len() < p.solution_len() {
            acc_bits -= bit_len;
            ret.push(((acc_value >> acc_bits) & bit_len_mask) as u32);
        }
    }

    Ok(ret)
}

/// Returns `true` if the padding bits after the last index are all zero.
pub(crate) fn has_canonical_padding(p: Params, minimal: &[u8]) -> bool {
    let pad_bits = p.minimal_len() * 8 - p.solution_len() * p.index_bit_length();
    match minimal.last() {
        Some(last) if pad_bits > 0 => last & ((1u8 << pad_bits) - 1) == 0,
        _ => true,
    }
}
