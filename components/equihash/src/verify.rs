//! Verification functions for the Equihash proof-of-work algorithm.

use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::{
    expander::Expander,
    minimal::{has_canonical_padding, indices_from_minimal},
    params::Params,
    solution::indices_from_bytes,
    Error,
};

#[derive(Clone)]
struct Node {
    /// The collision blocks that have not been consumed yet. `blocks[0]` is the block
    /// this node must collide on with its sibling.
    blocks: Vec<u32>,
    indices: Vec<u32>,
    /// The position at which the solver creates this node within its round: the row it
    /// was merged in, followed by the keys of its children.
    key: Vec<u32>,
}

impl Node {
    fn new(p: &Params, expander: &Expander, i: u32) -> Self {
        let blocks = expander.blocks(i);
        Node {
            blocks: blocks[..p.collision_blocks()].to_vec(),
            indices: vec![i],
            key: vec![i],
        }
    }

    fn from_children(a: Node, b: Node) -> Self {
        let blocks: Vec<_> = a
            .blocks
            .iter()
            .zip(b.blocks.iter())
            .skip(1)
            .map(|(a, b)| a ^ b)
            .collect();
        let mut key = Vec::with_capacity(1 + a.key.len() + b.key.len());
        key.push(a.blocks[0]);
        key.extend(a.key.iter());
        key.extend(b.key.iter());
        let mut indices = a.indices;
        indices.extend(b.indices.iter());
        Node {
            blocks,
            indices,
            key,
        }
    }

    #[cfg(test)]
    fn from_children_ref(a: &Node, b: &Node) -> Self {
        Node::from_children(a.clone(), b.clone())
    }

    fn key_before(&self, other: &Node) -> bool {
        // Keys of nodes at the same height have the same length, so lexicographic
        // comparison follows the solver's creation order.
        self.key < other.key
    }

    fn is_zero(&self) -> bool {
        self.blocks.iter().all(|v| *v == 0)
    }
}

/// An Equihash solution failed to verify.
#[derive(Debug)]
pub struct InvalidSolution(pub(crate) Kind);

impl fmt::Display for InvalidSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid solution: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidSolution {}

#[derive(Debug, PartialEq)]
pub(crate) enum Kind {
    SolutionLength,
    IndexOutOfRange,
    Collision,
    OutOfOrder,
    DuplicateIdxs,
    NonZeroRootHash,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::SolutionLength => f.write_str("wrong number of indices"),
            Kind::IndexOutOfRange => f.write_str("index outside of the base list"),
            Kind::Collision => f.write_str("invalid collision between sibling subtrees"),
            Kind::OutOfOrder => f.write_str("Index tree incorrectly ordered"),
            Kind::DuplicateIdxs => f.write_str("duplicate indices"),
            Kind::NonZeroRootHash => f.write_str("root hash of tree is non-zero"),
        }
    }
}

fn has_collision(a: &Node, b: &Node) -> bool {
    a.blocks[0] == b.blocks[0]
}

fn distinct_indices(a: &Node, b: &Node) -> bool {
    for i in &(a.indices) {
        for j in &(b.indices) {
            if i == j {
                return false;
            }
        }
    }
    true
}

fn validate_subtrees(a: &Node, b: &Node) -> Result<(), Kind> {
    if !has_collision(a, b) {
        Err(Kind::Collision)
    } else if b.key_before(a) {
        Err(Kind::OutOfOrder)
    } else if !distinct_indices(a, b) {
        Err(Kind::DuplicateIdxs)
    } else {
        Ok(())
    }
}

fn check_indices(p: &Params, indices: &[u32]) -> Result<(), Kind> {
    if indices.len() != p.solution_len() {
        Err(Kind::SolutionLength)
    } else if indices.iter().any(|i| u64::from(*i) >= p.base_list_len()) {
        Err(Kind::IndexOutOfRange)
    } else {
        Ok(())
    }
}

#[cfg(test)]
fn is_valid_solution_iterative(
    p: Params,
    input: &[u8],
    nonce: u32,
    indices: &[u32],
) -> Result<(), InvalidSolution> {
    check_indices(&p, indices).map_err(InvalidSolution)?;
    let expander = Expander::new(p, input, nonce);

    let mut rows = Vec::new();
    for i in indices {
        rows.push(Node::new(&p, &expander, *i));
    }

    while rows.len() > 1 {
        let mut cur_rows = Vec::new();
        for pair in rows.chunks(2) {
            let a = &pair[0];
            let b = &pair[1];
            validate_subtrees(a, b).map_err(InvalidSolution)?;
            cur_rows.push(Node::from_children_ref(a, b));
        }
        rows = cur_rows;
    }

    assert!(rows.len() == 1);

    if rows[0].is_zero() {
        Ok(())
    } else {
        Err(InvalidSolution(Kind::NonZeroRootHash))
    }
}

fn tree_validator(
    p: &Params,
    expander: &Expander,
    indices: &[u32],
) -> Result<Node, InvalidSolution> {
    if indices.len() > 1 {
        let end = indices.len();
        let mid = end / 2;
        let a = tree_validator(p, expander, &indices[0..mid])?;
        let b = tree_validator(p, expander, &indices[mid..end])?;
        validate_subtrees(&a, &b).map_err(InvalidSolution)?;
        Ok(Node::from_children(a, b))
    } else {
        Ok(Node::new(p, expander, indices[0]))
    }
}

/// Checks whether `indices` is a valid solution for `(seed, nonce)` with the parameters
/// `p`.
///
/// Sibling subtrees must collide on the block of their height, must appear in the order
/// the solver creates them, and must not share an index; the blocks that remain at the
/// root must be zero.
pub fn is_valid_solution(
    p: Params,
    seed: &[u8],
    nonce: u32,
    indices: &[u32],
) -> Result<(), InvalidSolution> {
    check_indices(&p, indices).map_err(InvalidSolution)?;
    let expander = Expander::new(p, seed, nonce);

    let root = tree_validator(&p, &expander, indices)?;

    // Collided blocks were trimmed, so only the last block remains.
    if root.is_zero() {
        Ok(())
    } else {
        Err(InvalidSolution(Kind::NonZeroRootHash))
    }
}

/// Verifies a proof in the word framing produced by
/// [`Solution::to_bytes`](crate::Solution::to_bytes).
///
/// Returns an error if `(n, k)` are invalid or `proof` has the wrong length, and
/// `Ok(false)` if the proof is well-formed but not a valid solution.
pub fn verify(n: u32, k: u32, seed: &[u8], nonce: u32, proof: &[u8]) -> Result<bool, Error> {
    let p = Params::new(n, k)?;
    let indices = indices_from_bytes(p, proof)?;
    Ok(check(p, seed, nonce, &indices))
}

/// Verifies a proof in the minimal framing produced by
/// [`Solution::to_minimal`](crate::Solution::to_minimal).
///
/// Non-zero padding bits make the proof invalid.
pub fn verify_minimal(
    n: u32,
    k: u32,
    seed: &[u8],
    nonce: u32,
    minimal: &[u8],
) -> Result<bool, Error> {
    let p = Params::new(n, k)?;
    let indices = indices_from_minimal(p, minimal)?;
    if !has_canonical_padding(p, minimal) {
        debug!("equihash::verify_minimal: non-zero padding bits");
        return Ok(false);
    }
    Ok(check(p, seed, nonce, &indices))
}

fn check(p: Params, seed: &[u8], nonce: u32, indices: &[u32]) -> bool {
    match is_valid_solution(p, seed, nonce, indices) {
        Ok(()) => true,
        Err(e) => {
            debug!(n = p.n, k = p.k, nonce, "equihash::verify: {}", e);
            false
        }
    }
}
