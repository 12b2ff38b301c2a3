use crate::{expander::DIGEST_WORDS, Error};

/// The largest collision bit length for which an index (one bit wider) fits in a `u32`.
const MAX_COLLISION_BIT_LENGTH: u32 = 31;

/// Validated Equihash parameters.
///
/// `n` is the number of digest bits that take part in collisions and `k` the number of
/// collision rounds. Every derived quantity used by the solver, the verifier and the
/// codecs is computed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    pub(crate) n: u32,
    pub(crate) k: u32,
}

impl Params {
    /// Returns an error if the parameters are invalid.
    pub fn new(n: u32, k: u32) -> Result<Self, Error> {
        // We place the following requirements on the parameters:
        // - k >= 1, so there is at least one collision round.
        // - n is a multiple of k + 1, so we have an integer collision bit length.
        // - the collision bit length is at least 1, and at most 31 so that an index,
        //   which is one bit wider, fits in a u32.
        // - k + 1 <= 8, as each collision block is read from its own digest word.
        if k >= 1 && k < DIGEST_WORDS as u32 && n % (k + 1) == 0 {
            let c_bit_len = n / (k + 1);
            if (1..=MAX_COLLISION_BIT_LENGTH).contains(&c_bit_len) {
                return Ok(Params { n, k });
            }
        }
        Err(Error::InvalidParams { n, k })
    }

    /// The total number of digest bits that must collide.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The number of collision rounds.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// The number of bits two elements must share in each round, `n / (k + 1)`.
    pub fn collision_bit_length(&self) -> usize {
        (self.n / (self.k + 1)) as usize
    }

    /// The number of bits used to encode a single index.
    pub fn index_bit_length(&self) -> usize {
        self.collision_bit_length() + 1
    }

    /// The number of collision blocks read from each digest, `k + 1`.
    pub(crate) fn collision_blocks(&self) -> usize {
        self.k as usize + 1
    }

    /// The number of indices in a solution, `2^k`.
    pub fn solution_len(&self) -> usize {
        1 << self.k
    }

    /// The number of leaves generated per nonce, `2^(collision_bit_length + 1)`.
    ///
    /// Every index in a valid solution is below this bound.
    pub fn base_list_len(&self) -> u64 {
        1 << self.index_bit_length()
    }

    /// The number of rows in each round's bucket table, `2^collision_bit_length`.
    #[cfg(feature = "solver")]
    pub(crate) fn rows(&self) -> usize {
        1 << self.collision_bit_length()
    }

    /// The byte length of a proof in the word framing.
    pub fn proof_len(&self) -> usize {
        self.solution_len() * 4
    }

    /// The byte length of a proof in the minimal framing.
    pub fn minimal_len(&self) -> usize {
        (self.solution_len() * self.index_bit_length() + 7) / 8
    }
}

impl Default for Params {
    /// The parameters most deployments use, `n = 90, k = 5`.
    fn default() -> Self {
        Params { n: 90, k: 5 }
    }
}

/// Checks that `(n, k)` are usable Equihash parameters.
pub fn validate(n: u32, k: u32) -> Result<(), Error> {
    Params::new(n, k).map(|_| ())
}
