//! The factorizer contract.

use crate::error::Result;
use crate::factor::Factor;
use crate::sink::FactorSink;

/// An offline LZ77 factorizer.
///
/// Implementations consume a complete input buffer and deliver factors to
/// a sink in strictly left-to-right input order. Concatenating the decoded
/// expansion of the factors reproduces the input exactly.
pub trait Factorizer {
    /// Factorize `text`, delivering factors to `sink` in order.
    ///
    /// An empty input produces no factors. On error the sink is left in
    /// whatever partial state it reached.
    fn factorize<S: FactorSink>(&self, text: &[u8], sink: &mut S) -> Result<()>;

    /// Factorize `text` into a freshly allocated vector (convenience
    /// method).
    fn factorize_to_vec(&self, text: &[u8]) -> Result<Vec<Factor>> {
        let mut factors = Vec::new();
        self.factorize(text, &mut factors)?;
        Ok(factors)
    }
}
