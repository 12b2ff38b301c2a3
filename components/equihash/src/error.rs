use core::fmt;

/// Errors raised by the solver, the verifier and the proof codecs.
///
/// A proof that decodes correctly but fails one of the Equihash conditions is not an
/// `Error`: [`verify`](crate::verify) reports it as `Ok(false)`, and
/// [`is_valid_solution`](crate::is_valid_solution) as an [`InvalidSolution`](crate::InvalidSolution).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The `(n, k)` pair does not satisfy the structural constraints.
    InvalidParams {
        /// The requested digest bit length.
        n: u32,
        /// The requested number of collision rounds.
        k: u32,
    },
    /// The encoded proof does not have the length implied by the parameters.
    InvalidProofLength {
        /// The exact byte length for the parameters.
        expected: usize,
        /// The byte length that was supplied.
        actual: usize,
    },
    /// The solver exhausted its attempt budget or nonce space.
    NoSolutionFound {
        /// The number of nonces that were tried.
        attempts: u32,
    },
    /// The solver's configured timeout elapsed.
    TimedOut,
    /// The caller cancelled the search.
    Cancelled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams { n, k } => {
                write!(f, "Invalid Equihash parameters: n = {}, k = {}", n, k)
            }
            Error::InvalidProofLength { expected, actual } => write!(
                f,
                "Invalid proof length: expected {} bytes, got {}",
                expected, actual
            ),
            Error::NoSolutionFound { attempts } => {
                write!(f, "No solution found after {} attempts", attempts)
            }
            Error::TimedOut => f.write_str("Solver timed out"),
            Error::Cancelled => f.write_str("Solver was cancelled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
