//! A collision-tree solver for Equihash.
//!
//! Each attempt fills a bucket table with the leaves of one nonce, then runs `k` rounds of
//! pairwise collisions. Rows are indexed by the collision block of the current round and
//! hold at most [`SolverConfig::bucket_capacity`] elements; every collision that is kept
//! is recorded as a fork in a flat, per-round arena, so a solution is recovered by walking
//! the arenas from the last round down to the leaves.

use alloc::vec::Vec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use maybe_rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use crate::{
    expander::{Blocks, Expander},
    params::Params,
    Error, Solution,
};

/// The number of elements each row of a bucket table can hold.
pub const DEFAULT_BUCKET_CAPACITY: usize = 5;

/// Each round keeps at most this many forks per table row.
pub const DEFAULT_FORK_MULTIPLIER: usize = 3;

/// The first nonce tried by the solver.
pub const DEFAULT_FIRST_NONCE: u32 = 2;

/// The last nonce tried by the solver.
pub const DEFAULT_LAST_NONCE: u32 = 0xFFFFF;

/// The largest bucket capacity a [`Solver`] will use. Larger values are clamped.
pub const MAX_BUCKET_CAPACITY: usize = 255;

/// The number of leaves hashed per batch while filling the base table.
const FILL_BATCH: u64 = 1 << 16;

/// Tuning and budget for [`Solver`].
///
/// The defaults reproduce the Biryukov and Khovratovich solver: the same nonces are tried
/// in the same order, and the same solution is returned for each of them. Changing
/// `bucket_capacity` or `fork_multiplier` changes which solutions are found, but never
/// their validity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// The number of elements each row of a bucket table can hold. Values below 2 leave
    /// nothing to collide, and values above [`MAX_BUCKET_CAPACITY`] are clamped.
    pub bucket_capacity: usize,
    /// Each round keeps at most `fork_multiplier` forks per table row.
    pub fork_multiplier: usize,
    /// The first nonce to try.
    pub first_nonce: u32,
    /// The last nonce to try, inclusive.
    pub last_nonce: u32,
    /// The maximum number of nonces to try, if any.
    pub max_attempts: Option<u32>,
    /// The wall-clock budget for a whole search, if any.
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            fork_multiplier: DEFAULT_FORK_MULTIPLIER,
            first_nonce: DEFAULT_FIRST_NONCE,
            last_nonce: DEFAULT_LAST_NONCE,
            max_attempts: None,
            timeout: None,
        }
    }
}

impl SolverConfig {
    /// Limits the search to `max_attempts` nonces.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Limits the search to the given wall-clock duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Tries the nonces in `first..=last`.
    pub fn with_nonces(mut self, first: u32, last: u32) -> Self {
        self.first_nonce = first;
        self.last_nonce = last;
        self
    }
}

/// A collision recorded in a round: references to the two colliding elements of the
/// previous round (or to leaf indices, in the first round).
#[derive(Clone, Copy, Debug)]
struct Fork {
    left: u32,
    right: u32,
}

/// One round's list, bucketed by the next collision block.
///
/// Each element stores the collision blocks that are still to be matched, and a
/// reference: a leaf index in the base table, or a position in the previous round's
/// fork arena afterwards.
struct Table {
    capacity: usize,
    width: usize,
    filled: Vec<usize>,
    refs: Vec<u32>,
    blocks: Vec<u32>,
}

impl Table {
    fn new(rows: usize, capacity: usize, width: usize) -> Self {
        Table {
            capacity,
            width,
            filled: vec![0; rows],
            refs: vec![0; rows.saturating_mul(capacity)],
            blocks: vec![0; rows.saturating_mul(capacity).saturating_mul(width)],
        }
    }

    fn rows(&self) -> usize {
        self.filled.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self.filled[row]
    }

    fn len(&self) -> usize {
        self.filled.iter().sum()
    }

    fn reference(&self, row: usize, slot: usize) -> u32 {
        self.refs[row * self.capacity + slot]
    }

    fn blocks(&self, row: usize, slot: usize) -> &[u32] {
        let start = (row * self.capacity + slot) * self.width;
        &self.blocks[start..start + self.width]
    }

    fn has_room(&self, row: usize) -> bool {
        self.filled[row] < self.capacity
    }

    /// Appends an element to `row`, which must have room.
    fn push(&mut self, row: usize, reference: u32, blocks: impl Iterator<Item = u32>) {
        let slot = row * self.capacity + self.filled[row];
        self.refs[slot] = reference;
        for (dst, src) in self.blocks[slot * self.width..(slot + 1) * self.width]
            .iter_mut()
            .zip(blocks)
        {
            *dst = src;
        }
        self.filled[row] += 1;
    }
}

/// Observes cancellation and the deadline at round boundaries.
struct Guard<'a> {
    cancel: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
}

impl Guard<'_> {
    fn check(&self) -> Result<(), Error> {
        if self.cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            Err(Error::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Err(Error::TimedOut)
        } else {
            Ok(())
        }
    }
}

/// An Equihash solver for fixed parameters.
#[derive(Clone, Debug)]
pub struct Solver {
    params: Params,
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver for `params`.
    ///
    /// `config.bucket_capacity` is clamped to [`MAX_BUCKET_CAPACITY`].
    pub fn new(params: Params, mut config: SolverConfig) -> Self {
        config.bucket_capacity = config.bucket_capacity.min(MAX_BUCKET_CAPACITY);
        Solver { params, config }
    }

    /// The parameters this solver searches for.
    pub fn params(&self) -> Params {
        self.params
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches the configured nonces in order, returning the first solution found.
    pub fn solve(&self, seed: &[u8]) -> Result<Solution, Error> {
        self.search(seed, None)
    }

    /// Like [`Solver::solve`], but gives up with [`Error::Cancelled`] as soon as `cancel`
    /// is set. The flag is checked between rounds.
    pub fn solve_with_cancel(&self, seed: &[u8], cancel: &AtomicBool) -> Result<Solution, Error> {
        self.search(seed, Some(cancel))
    }

    /// Runs a single attempt with the given nonce.
    ///
    /// Returns `None` if this nonce has no solution reachable by the solver.
    pub fn solve_nonce(&self, seed: &[u8], nonce: u32) -> Option<Solution> {
        let guard = Guard {
            cancel: None,
            deadline: None,
        };
        // Without a cancellation flag or a deadline the guard never fires.
        self.attempt(seed, nonce, &guard)
            .ok()
            .flatten()
            .map(|indices| Solution::new(self.params, nonce, indices))
    }

    fn search(&self, seed: &[u8], cancel: Option<&AtomicBool>) -> Result<Solution, Error> {
        let p = self.params;
        let guard = Guard {
            cancel,
            deadline: self.config.timeout.map(|t| Instant::now() + t),
        };
        debug!(n = p.n, k = p.k, "equihash::solve: starting search");

        let mut attempts = 0;
        for nonce in self.config.first_nonce..=self.config.last_nonce {
            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                break;
            }
            attempts += 1;

            if let Some(indices) = self.attempt(seed, nonce, &guard)? {
                debug!(nonce, attempts, "equihash::solve: found solution");
                return Ok(Solution::new(p, nonce, indices));
            }
        }

        debug!(attempts, "equihash::solve: no solution found");
        Err(Error::NoSolutionFound { attempts })
    }

    fn attempt(&self, seed: &[u8], nonce: u32, guard: &Guard<'_>) -> Result<Option<Vec<u32>>, Error> {
        let _span = debug_span!("attempt", nonce).entered();
        guard.check()?;

        let expander = Expander::new(self.params, seed, nonce);
        let mut table = self.fill(&expander);
        trace!(elements = table.len(), "filled base table");

        let mut forks = Vec::with_capacity(self.params.k as usize - 1);
        for round in 1..self.params.k {
            guard.check()?;
            let (next, round_forks) = self.merge(&table);
            trace!(
                round,
                elements = next.len(),
                forks = round_forks.len(),
                "resolved collisions"
            );
            forks.push(round_forks);
            table = next;
        }

        guard.check()?;
        Ok(self.find_solution(&table, &forks))
    }

    /// Hashes every leaf and buckets it by its first collision block. Leaves are inserted
    /// in index order, so a full row keeps its lowest indices.
    fn fill(&self, expander: &Expander) -> Table {
        let p = self.params;
        let k = p.k as usize;
        let mut table = Table::new(p.rows(), self.config.bucket_capacity, k);

        let total = p.base_list_len();
        let mut start = 0;
        while start < total {
            let batch = FILL_BATCH.min(total - start) as usize;
            let leaves: Vec<Blocks> = (0..batch)
                .into_par_iter()
                .map(|offset| expander.blocks((start + offset as u64) as u32))
                .collect();

            for (offset, blocks) in leaves.iter().enumerate() {
                let row = blocks[0] as usize;
                if table.has_room(row) {
                    let index = (start + offset as u64) as u32;
                    table.push(row, index, blocks[1..=k].iter().copied());
                }
            }
            start += batch as u64;
        }

        table
    }

    /// Collides every pair of elements within each row, keeping the XOR of their
    /// remaining blocks in the row named by the XOR of their current block.
    fn merge(&self, table: &Table) -> (Table, Vec<Fork>) {
        let rows = table.rows();
        let max_forks = rows
            .saturating_mul(self.config.fork_multiplier)
            .min(u32::MAX as usize);
        let mut next = Table::new(rows, self.config.bucket_capacity, table.width - 1);
        let mut forks = Vec::new();

        for row in 0..rows {
            let len = table.row_len(row);
            for j in 0..len {
                for m in j + 1..len {
                    let a = table.blocks(row, j);
                    let b = table.blocks(row, m);
                    let new_row = (a[0] ^ b[0]) as usize;
                    if next.has_room(new_row) && forks.len() < max_forks {
                        next.push(
                            new_row,
                            forks.len() as u32,
                            a[1..].iter().zip(&b[1..]).map(|(x, y)| x ^ y),
                        );
                        forks.push(Fork {
                            left: table.reference(row, j),
                            right: table.reference(row, m),
                        });
                    }
                }
            }
        }

        (next, forks)
    }

    /// Looks for a pair whose last block cancels and whose leaves are all distinct.
    fn find_solution(&self, table: &Table, forks: &[Vec<Fork>]) -> Option<Vec<u32>> {
        for row in 0..table.rows() {
            let len = table.row_len(row);
            for j in 0..len {
                for m in j + 1..len {
                    if table.blocks(row, j)[0] != table.blocks(row, m)[0] {
                        continue;
                    }

                    let mut indices = Vec::with_capacity(self.params.solution_len());
                    resolve_leaves(
                        forks,
                        Fork {
                            left: table.reference(row, j),
                            right: table.reference(row, m),
                        },
                        &mut indices,
                    );

                    if distinct(&indices) {
                        return Some(indices);
                    }
                    trace!("discarding candidate with duplicate indices");
                }
            }
        }
        None
    }
}

/// Appends the leaves below `fork`, left subtree first. `levels` holds the fork arenas of
/// the rounds below the one `fork` was found in.
fn resolve_leaves(levels: &[Vec<Fork>], fork: Fork, out: &mut Vec<u32>) {
    match levels.split_last() {
        None => {
            out.push(fork.left);
            out.push(fork.right);
        }
        Some((top, below)) => {
            resolve_leaves(below, top[fork.left as usize], out);
            resolve_leaves(below, top[fork.right as usize], out);
        }
    }
}

fn distinct(indices: &[u32]) -> bool {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0] != w[1])
}

/// Searches for a solution for `seed` with parameters `(n, k)` and the default
/// [`SolverConfig`].
pub fn solve(seed: &[u8], n: u32, k: u32) -> Result<Solution, Error> {
    Solver::new(Params::new(n, k)?, SolverConfig::default()).solve(seed)
}
