//! Error types for ziv operations.

use thiserror::Error;

/// The error type shared by all ziv crates.
#[derive(Debug, Error)]
pub enum ZivError {
    /// Invalid distance in an LZ77 back-reference: the factor points
    /// before the start of the decoded output.
    #[error("Invalid back-reference distance: {distance} exceeds decoded length {decoded_len}")]
    InvalidDistance {
        /// The offending distance value (0 is also invalid).
        distance: usize,
        /// Number of bytes decoded when the factor was encountered.
        decoded_len: usize,
    },

    /// The suffix-sort backend reported a failure.
    #[error("Suffix sorting failed: {0}")]
    SuffixSort(String),
}

/// Result type alias for ziv operations.
pub type Result<T> = std::result::Result<T, ZivError>;

impl ZivError {
    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, decoded_len: usize) -> Self {
        Self::InvalidDistance {
            distance,
            decoded_len,
        }
    }

    /// Create a suffix-sort backend error from the backend's own error.
    pub fn suffix_sort(err: impl std::fmt::Display) -> Self {
        Self::SuffixSort(err.to_string())
    }
}
