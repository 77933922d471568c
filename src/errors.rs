//! Error types for invariant violations that must not occur for valid
//! inputs: programmer errors that should abort or be surfaced as
//! diagnostic output, never silently ignored. Caller-error / degenerate
//! input — a zero in an input multiset, a half of `cb`'s recursion that
//! collapses to an empty base — is *not* an error; it is reported through
//! `log::warn!` and handled with a best-effort result.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `split` must return exactly one value per input factor. A mismatch
    /// can only happen if an internal recursion bound was computed wrong;
    /// it can never occur for valid, coprime inputs.
    #[error("split produced {actual} values for {expected} factors (programmer error)")]
    SplitLengthMismatch { expected: usize, actual: usize },

    /// `cbmerge` assumes both sides are non-empty; `cb` never calls it
    /// otherwise, so reaching this means a caller invoked `cbmerge`
    /// directly with a degenerate side.
    #[error("cbmerge called with an empty side")]
    EmptyCbMergeSide,
}
