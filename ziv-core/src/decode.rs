//! Reference decoder for factor sequences.
//!
//! Expands a factor sequence back into the original byte string. This is
//! the ground truth used by the test suites to validate factorizations;
//! it favors clarity over speed.

use crate::error::{Result, ZivError};
use crate::factor::Factor;

/// Decode a factor sequence into the byte string it represents.
///
/// References are copied byte by byte, so self-overlapping references
/// (distance smaller than length) expand the way LZ77 semantics demand:
/// each copied byte may itself have been produced by the same factor.
///
/// Returns [`ZivError::InvalidDistance`] if a referencing factor points
/// before the start of the decoded output (or has distance 0).
///
/// # Example
///
/// ```rust
/// use ziv_core::{decode, Factor};
///
/// let factors = [
///     Factor::literal(b'a'),
///     Factor::literal(b'b'),
///     Factor::reference(2, 4),
/// ];
/// assert_eq!(decode(&factors).unwrap(), b"ababab");
/// ```
pub fn decode(factors: &[Factor]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(factors.iter().map(Factor::num_literals).sum());

    for factor in factors {
        if factor.is_reference() {
            if factor.src == 0 || factor.src > out.len() {
                return Err(ZivError::invalid_distance(factor.src, out.len()));
            }
            let start = out.len() - factor.src;
            // Byte-by-byte so the source window may grow into the copy.
            for i in 0..factor.len {
                let byte = out[start + i];
                out.push(byte);
            }
        } else {
            out.push(factor.literal_value());
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&[]).unwrap(), b"");
    }

    #[test]
    fn test_decode_literals() {
        let factors = [
            Factor::literal(b'a'),
            Factor::literal(b'b'),
            Factor::literal(b'c'),
        ];
        assert_eq!(decode(&factors).unwrap(), b"abc");
    }

    #[test]
    fn test_decode_back_reference() {
        let factors = [
            Factor::literal(b'a'),
            Factor::literal(b'b'),
            Factor::literal(b'c'),
            Factor::reference(3, 3),
        ];
        assert_eq!(decode(&factors).unwrap(), b"abcabc");
    }

    #[test]
    fn test_decode_self_overlapping_reference() {
        // One literal followed by (distance 1, length 5) must behave as a
        // progressive copy, not a block copy.
        let factors = [Factor::literal(b'a'), Factor::reference(1, 5)];
        assert_eq!(decode(&factors).unwrap(), b"aaaaaa");
    }

    #[test]
    fn test_decode_rejects_distance_past_start() {
        let factors = [Factor::literal(b'a'), Factor::reference(2, 1)];
        let err = decode(&factors).unwrap_err();
        assert!(matches!(
            err,
            ZivError::InvalidDistance {
                distance: 2,
                decoded_len: 1,
            }
        ));
    }

    #[test]
    fn test_decode_rejects_zero_distance() {
        let factors = [Factor::literal(b'a'), Factor::reference(0, 3)];
        assert!(matches!(
            decode(&factors),
            Err(ZivError::InvalidDistance { distance: 0, .. })
        ));
    }
}
