//! # ziv-lpf: Exact LZ77 Factorization
//!
//! This crate computes an exact Lempel-Ziv 77 factorization of a byte
//! sequence using the longest previous factor (LPF) method.
//!
//! ## Algorithm
//!
//! The factorizer first builds the suffix array, its inverse and the LCP
//! array of the input (suffix sorting is delegated to `libsais`). For
//! each text position it then locates the nearest rank above and below
//! the position's own rank whose suffix starts earlier in the text
//! (previous/next smaller value on the suffix array), taking the LCP
//! window minimum as the match length. The greedy left-to-right parse
//! emits the longer of the two candidates as a back-reference when it
//! reaches the minimum reference length, and a literal byte otherwise.
//!
//! The whole input must be in memory: the factorization is strictly
//! offline. Inputs up to `i32::MAX` bytes use 32-bit index arrays;
//! larger inputs transparently switch to the backend's 64-bit surface.
//!
//! ## Example
//!
//! ```rust
//! use ziv_lpf::{factorize, Factor};
//! use ziv_core::decode;
//!
//! let text = b"ananasbananapanamabahamascabana";
//! let factors = factorize(text).unwrap();
//!
//! // The parse starts with two literals and a back-reference.
//! assert_eq!(factors[0], Factor::literal(b'a'));
//! assert_eq!(factors[1], Factor::literal(b'n'));
//! assert_eq!(factors[2], Factor::reference(2, 3));
//!
//! // Decoding reproduces the input exactly.
//! assert_eq!(decode(&factors).unwrap(), text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod factorizer;
mod index;
mod suffix;

pub use factorizer::LpfFactorizer;

// Re-export the shared contracts so downstream code can depend on this
// crate alone.
pub use ziv_core::{decode, Factor, FactorSink, FactorStats, Factorizer, Result, ZivError};

/// Factorize `text` with the default configuration (minimum reference
/// length 2), returning the factor sequence.
///
/// This is shorthand for
/// `LpfFactorizer::new().factorize_to_vec(text)`.
///
/// # Example
///
/// ```rust
/// use ziv_lpf::factorize;
///
/// let factors = factorize(b"abcabcabc").unwrap();
/// assert!(factors.len() < 9);
/// ```
pub fn factorize(text: &[u8]) -> Result<Vec<Factor>> {
    LpfFactorizer::new().factorize_to_vec(text)
}
