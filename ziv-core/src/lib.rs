//! # ziv-core
//!
//! Core contracts for the ziv LZ77 factorization library.
//!
//! This crate defines the vocabulary shared by every factorizer in the
//! workspace:
//!
//! - [`factor`]: the [`Factor`] value type (literal or back-reference)
//! - [`sink`]: the [`FactorSink`] output contract and stock sinks
//! - [`traits`]: the [`Factorizer`] trait
//! - [`decode`]: a reference decoder used to validate factorizations
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! Factorizers are offline: they consume a complete in-memory byte slice
//! and stream factors into a sink. The sink never sees a factor out of
//! order, and the concatenated [`Factor::num_literals`] of all factors
//! equals the input length. Concrete algorithms (such as the LPF
//! factorizer in `ziv-lpf`) live in their own crates and depend on this
//! one.
//!
//! ## Example
//!
//! ```rust
//! use ziv_core::{decode, Factor};
//!
//! // A hand-built parse of "abab": two literals and one reference.
//! let factors = vec![
//!     Factor::literal(b'a'),
//!     Factor::literal(b'b'),
//!     Factor::reference(2, 2),
//! ];
//!
//! assert_eq!(decode(&factors).unwrap(), b"abab");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod decode;
pub mod error;
pub mod factor;
pub mod sink;
pub mod traits;

// Re-exports for convenience
pub use decode::decode;
pub use error::{Result, ZivError};
pub use factor::Factor;
pub use sink::{FactorSink, FactorStats};
pub use traits::Factorizer;
