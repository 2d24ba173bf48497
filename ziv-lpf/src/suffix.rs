//! Binding to the external suffix-sort backend.
//!
//! The factorizer consumes the suffix array and the rank-ordered LCP
//! array; both are produced by `libsais` through its construction ladder
//! (suffix array, then the permuted LCP array, then the LCP array). The
//! PLCP stays an internal intermediate of the ladder. The inverse suffix
//! array is not part of the backend contract and is derived by the
//! caller with a plain inverse-permutation loop.

use libsais::SuffixArrayConstruction;
use ziv_core::{Result, ZivError};

/// Build the suffix array and LCP array of `text` on the backend's
/// 32-bit surface. Requires `text.len() <= i32::MAX`.
pub(crate) fn sort_with_lcp_32(text: &[u8]) -> Result<(Vec<i32>, Vec<i32>)> {
    let sa = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;
    let with_plcp = sa
        .plcp_construction()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;
    let with_lcp = with_plcp
        .lcp_construction()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;

    let (sa, lcp, _, _) = with_lcp.into_parts();
    Ok((sa, lcp))
}

/// Build the suffix array and LCP array of `text` on the backend's
/// 64-bit surface. Works for any input length that fits in memory.
pub(crate) fn sort_with_lcp_64(text: &[u8]) -> Result<(Vec<i64>, Vec<i64>)> {
    let sa = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer64()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;
    let with_plcp = sa
        .plcp_construction()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;
    let with_lcp = with_plcp
        .lcp_construction()
        .single_threaded()
        .run()
        .map_err(ZivError::suffix_sort)?;

    let (sa, lcp, _, _) = with_lcp.into_parts();
    Ok((sa, lcp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana_arrays() {
        let (sa, lcp) = sort_with_lcp_32(b"banana").unwrap();
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(lcp, vec![0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn test_single_byte_arrays() {
        let (sa, lcp) = sort_with_lcp_32(b"x").unwrap();
        assert_eq!(sa, vec![0]);
        assert_eq!(lcp, vec![0]);
    }

    #[test]
    fn test_widths_agree() {
        let text = b"ananasbananapanamabahamascabana";
        let (sa32, lcp32) = sort_with_lcp_32(text).unwrap();
        let (sa64, lcp64) = sort_with_lcp_64(text).unwrap();

        let sa32_widened: Vec<i64> = sa32.iter().map(|&v| v as i64).collect();
        let lcp32_widened: Vec<i64> = lcp32.iter().map(|&v| v as i64).collect();
        assert_eq!(sa32_widened, sa64);
        assert_eq!(lcp32_widened, lcp64);
    }
}
