//! Equihash is a Proof-of-Work algorithm, based on a generalization of the Birthday
//! problem which finds colliding hash values. It was designed to be memory-hard; more
//! specifically, the bottle-neck for parallel implementations of Equihash solvers would
//! be memory bandwidth.
//!
//! This crate implements the variant of Equihash described by Biryukov and Khovratovich
//! in their reference implementation: leaves are BLAKE2b-256 digests of a 16-byte seed
//! block, a 32-bit nonce and a 32-bit index, and each of the `k + 1` collision blocks is
//! taken from the top bits of one little-endian digest word. It can solve and verify for
//! any `(n, k)` with `k + 1 <= 8` and a collision bit length between 1 and 31.
//!
//! ```
//! # #[cfg(feature = "solver")]
//! # fn main() -> Result<(), equihash_pow::Error> {
//! let solution = equihash_pow::solve(b"some block header", 40, 4)?;
//! let proof = solution.to_bytes();
//! assert!(equihash_pow::verify(40, 4, b"some block header", solution.nonce(), &proof)?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "solver"))]
//! # fn main() {}
//! ```
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!
//! References
//! ==========
//! - Alex Biryukov and Dmitry Khovratovich.
//!   [*Equihash: Asymmetric Proof-of-Work Based on the Generalized Birthday Problem.*][BK16]
//!   NDSS ’16.
//! - David Wagner. *A Generalized Birthday Problem.* CRYPTO 2002.
//!
//! [BK16]: https://www.internetsociety.org/sites/default/files/blogs-media/equihash-asymmetric-proof-of-work-based-generalized-birthday-problem.pdf

// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, doc(auto_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate alloc;

mod error;
mod expander;
mod minimal;
mod params;
mod solution;
mod verify;

#[cfg(feature = "solver")]
pub mod solver;


pub use error::Error;
pub use expander::{Expander, SEED_LENGTH};
pub use minimal::{indices_from_minimal, minimal_from_indices};
pub use params::{validate, Params};
pub use solution::{indices_from_bytes, indices_to_bytes, Solution};
pub use verify::{is_valid_solution, verify, verify_minimal, InvalidSolution};

#[cfg(feature = "solver")]
pub use solver::{solve, Solver, SolverConfig};
