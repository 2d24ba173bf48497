//! The LPF factorizer.
//!
//! Computes an exact LZ77 factorization by simulating a scan of the
//! longest previous factor (LPF) array. The suffix array, its inverse
//! and the LCP array are built first; for each text position the longest
//! previous factor is then obtained from the nearest smaller suffix-array
//! value above and below the position's rank (PSV/NSV), with the LCP
//! window minimum as the match length. The greedy left-to-right parse
//! emits a reference whenever that length reaches the configured minimum,
//! and a literal otherwise.
//!
//! When several sources are eligible for a factor, the one with the
//! smaller lexicographic rank wins: the factorization is neither leftmost
//! nor rightmost in text order.

use ziv_core::{Factor, FactorSink, Factorizer, Result};

use crate::index::SaIndex;
use crate::suffix;

/// Exact LZ77 factorizer based on the longest previous factor array.
///
/// # Example
///
/// ```rust
/// use ziv_lpf::{Factorizer, LpfFactorizer};
/// use ziv_core::decode;
///
/// let text = b"ananasbananapanamabahamascabana";
/// let factors = LpfFactorizer::new().factorize_to_vec(text).unwrap();
///
/// assert_eq!(factors.len(), 17);
/// assert_eq!(decode(&factors).unwrap(), text);
/// ```
#[derive(Debug, Clone)]
pub struct LpfFactorizer {
    min_ref_len: usize,
}

impl LpfFactorizer {
    /// Create a factorizer with the default minimum reference length of 2.
    pub fn new() -> Self {
        Self { min_ref_len: 2 }
    }

    /// Create a factorizer with the given minimum reference length.
    ///
    /// A value of 0 is clamped to 1.
    pub fn with_min_reference_length(min_ref_len: usize) -> Self {
        Self {
            min_ref_len: min_ref_len.max(1),
        }
    }

    /// The minimum length of a referencing factor.
    ///
    /// A previous occurrence shorter than this length is ignored and a
    /// literal factor is emitted instead.
    pub fn min_reference_length(&self) -> usize {
        self.min_ref_len
    }

    /// Set the minimum length of a referencing factor.
    ///
    /// A value of 0 is clamped to 1 (a reference always copies at least
    /// one byte).
    pub fn set_min_reference_length(&mut self, min_ref_len: usize) {
        self.min_ref_len = min_ref_len.max(1);
    }
}

impl Default for LpfFactorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Factorizer for LpfFactorizer {
    fn factorize<S: FactorSink>(&self, text: &[u8], sink: &mut S) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        // The auxiliary arrays are confined to one branch and dropped
        // before this function returns, on success and error alike.
        if text.len() <= i32::MAX as usize {
            let (sa, lcp) = suffix::sort_with_lcp_32(text)?;
            let isa = invert(&sa);
            parse(text, &sa, &isa, &lcp, self.min_ref_len, sink);
        } else {
            let (sa, lcp) = suffix::sort_with_lcp_64(text)?;
            let isa = invert(&sa);
            parse(text, &sa, &isa, &lcp, self.min_ref_len, sink);
        }

        Ok(())
    }
}

/// Invert the suffix array permutation: `isa[sa[rank]] = rank`.
fn invert<I: SaIndex>(sa: &[I]) -> Vec<I> {
    let mut isa = vec![I::ZERO; sa.len()];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[pos.to_usize()] = I::from_usize(rank);
    }
    isa
}

/// Longest previous factor for the suffix ranked `cur`.
///
/// Returns `(length, source)` where `source` is the text position of the
/// witness occurrence; `(0, 0)` when no earlier occurrence shares a
/// prefix. The length is the minimum of the LCP window between `cur` and
/// the nearest rank whose suffix starts earlier in the text.
fn longest_previous_factor<I: SaIndex>(sa: &[I], lcp: &[I], cur: usize) -> (usize, usize) {
    let n = sa.len();

    // PSV: walk toward smaller ranks. The window minimum includes the
    // current rank's LCP entry and excludes the terminal one. If the walk
    // runs off the low end it has absorbed lcp[0] == 0 on the way, so a
    // missing witness always contributes 0.
    let mut psv_lcp = lcp[cur].to_usize();
    let mut psv_pos = cur as isize - 1;
    if psv_lcp > 0 {
        while psv_pos >= 0 && sa[psv_pos as usize] > sa[cur] {
            psv_lcp = psv_lcp.min(lcp[psv_pos as usize].to_usize());
            psv_pos -= 1;
        }
    }

    // NSV: walk toward larger ranks. The window minimum excludes the
    // current rank's LCP entry and includes the terminal one.
    let mut nsv_lcp = 0;
    let mut nsv_pos = cur + 1;
    if nsv_pos < n {
        nsv_lcp = usize::MAX;
        while nsv_pos < n {
            nsv_lcp = nsv_lcp.min(lcp[nsv_pos].to_usize());
            if sa[nsv_pos] < sa[cur] {
                break;
            }
            nsv_pos += 1;
        }
        // Ran off the high end: every rank above starts later in the
        // text, so the window minimum has no witness and does not count.
        if nsv_pos >= n {
            nsv_lcp = 0;
        }
    }

    let max_lcp = psv_lcp.max(nsv_lcp);
    if max_lcp == 0 {
        return (0, 0);
    }

    // Equal lengths resolve to the PSV witness, i.e. the source whose
    // suffix has the smaller lexicographic rank.
    let witness = if max_lcp == psv_lcp {
        debug_assert!(psv_pos >= 0);
        psv_pos as usize
    } else {
        nsv_pos
    };
    debug_assert!(witness < n);
    (max_lcp, sa[witness].to_usize())
}

/// Greedy left-to-right parse over the prepared arrays.
fn parse<I: SaIndex, S: FactorSink>(
    text: &[u8],
    sa: &[I],
    isa: &[I],
    lcp: &[I],
    min_ref_len: usize,
    sink: &mut S,
) {
    let n = text.len();
    let mut i = 0;
    while i < n {
        let cur = isa[i].to_usize();
        let (max_lcp, src) = longest_previous_factor(sa, lcp, cur);

        if max_lcp >= min_ref_len {
            debug_assert!(src < i);
            sink.push(Factor::reference(i - src, max_lcp));
            i += max_lcp;
        } else {
            sink.push(Factor::literal(text[i]));
            i += 1;
        }
    }
}
