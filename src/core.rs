//! Core traits and types for Rawsort.
//!
//! This module defines:
//! - [`RecordCompare`]: the comparator seam every internal comparison routes through.
//! - `RecordSlice`: internal width-typed view over the raw record buffer.
//! - Record swap primitives (word-size fast paths plus a chunked fallback).

use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Size of the stack scratch buffer used by the generic swap path.
///
/// Records wider than this are exchanged in chunks of this size, so stack usage
/// stays bounded no matter how wide a record is.
pub const SWAP_CHUNK_SIZE: usize = 256;

/// A comparator over raw, fixed-size records.
///
/// This trait is the single call site all internal comparisons go through. The
/// closure-based entry points ([`rawsort`](crate::rawsort) and
/// [`rawsort_with`](crate::rawsort_with)) wrap their predicates in private
/// adapters implementing it; custom comparator objects (for example an
/// instrumented, comparison-counting one) can implement it directly and be
/// passed to [`rawsort_by`](crate::rawsort_by).
///
/// # Contract
///
/// `compare` must be a strict weak ordering over the records it will see. A
/// comparator that violates this yields an unspecified permutation of the
/// input, or a panic from an internal bounds check — never memory unsafety.
///
/// # Examples
///
/// ```
/// use rawsort::{RecordCompare, rawsort_by};
/// use std::cmp::Ordering;
///
/// struct ByFirstByte;
///
/// impl RecordCompare for ByFirstByte {
///     fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering {
///         a[0].cmp(&b[0])
///     }
/// }
///
/// let mut records = vec![3u8, 9, 1, 9, 2, 9];
/// rawsort_by(&mut records, 2, &mut ByFirstByte);
/// assert_eq!(records, vec![1, 9, 2, 9, 3, 9]);
/// ```
pub trait RecordCompare {
    /// Orders two records of equal width.
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering;
}

/// Adapter for the context-free calling convention.
pub(crate) struct OrderingFn<F>(pub F);

impl<F> RecordCompare for OrderingFn<F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering {
        (self.0)(a, b)
    }
}

/// Adapter for the context-carrying calling convention: an opaque caller
/// reference is threaded through every comparison.
pub(crate) struct ContextOrderingFn<'c, X: ?Sized, F> {
    pub context: &'c X,
    pub compare: F,
}

impl<'c, X: ?Sized, F> RecordCompare for ContextOrderingFn<'c, X, F>
where
    F: FnMut(&[u8], &[u8], &X) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering {
        (self.compare)(a, b, self.context)
    }
}

/// A view of a byte buffer as `len / width` contiguous records of `width`
/// bytes each.
///
/// All index arithmetic stays inside the wrapped slice, so out-of-bounds
/// access is impossible by construction; a broken comparator can at worst
/// trip a bounds check.
pub(crate) struct RecordSlice<'a> {
    buf: &'a mut [u8],
    width: usize,
}

impl<'a> RecordSlice<'a> {
    pub(crate) fn new(buf: &'a mut [u8], width: usize) -> Self {
        debug_assert!(width > 0);
        debug_assert_eq!(buf.len() % width, 0);
        Self { buf, width }
    }

    /// Number of whole records in the view.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.buf.len() / self.width
    }

    /// Borrows the record at `index`.
    #[inline(always)]
    pub(crate) fn record(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.buf[start..start + self.width]
    }

    /// Exchanges the records at `i` and `j`. Self-swaps are no-ops.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let w = self.width;
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        // Splitting at the higher record start yields two provably disjoint
        // regions, which the borrow checker demands for a two-sided exchange.
        let (head, tail) = self.buf.split_at_mut(hi * w);
        let a = &mut head[lo * w..lo * w + w];
        let b = &mut tail[..w];
        swap_records(a, b);
    }

    /// Splits the view into `[0, mid)` and `[mid, len)`.
    pub(crate) fn split_at(self, mid: usize) -> (RecordSlice<'a>, RecordSlice<'a>) {
        let (left, right) = self.buf.split_at_mut(mid * self.width);
        (
            RecordSlice {
                buf: left,
                width: self.width,
            },
            RecordSlice {
                buf: right,
                width: self.width,
            },
        )
    }
}

// Cache-aligned scratch for the generic swap path.
#[cuneiform]
struct SwapScratch {
    data: [u8; SWAP_CHUNK_SIZE],
}

/// Exchanges two non-overlapping regions of equal length.
///
/// Widths 1, 2, 4 and 8 go through a fixed-size array temporary, which
/// compiles down to a single load/store pair at native width. Every other
/// width loops through [`SwapScratch`] in chunks of [`SWAP_CHUNK_SIZE`] bytes.
#[inline]
pub(crate) fn swap_records(a: &mut [u8], b: &mut [u8]) {
    debug_assert_eq!(a.len(), b.len());
    match a.len() {
        1 => swap_word::<1>(a, b),
        2 => swap_word::<2>(a, b),
        4 => swap_word::<4>(a, b),
        8 => swap_word::<8>(a, b),
        _ => swap_chunked(a, b),
    }
}

#[inline(always)]
fn swap_word<const N: usize>(a: &mut [u8], b: &mut [u8]) {
    let mut tmp = [0u8; N];
    tmp.copy_from_slice(a);
    a.copy_from_slice(b);
    b.copy_from_slice(&tmp);
}

fn swap_chunked(a: &mut [u8], b: &mut [u8]) {
    let mut scratch = SwapScratch {
        data: [0u8; SWAP_CHUNK_SIZE],
    };
    for (chunk_a, chunk_b) in a.chunks_mut(SWAP_CHUNK_SIZE).zip(b.chunks_mut(SWAP_CHUNK_SIZE)) {
        let tmp = &mut scratch.data[..chunk_a.len()];
        tmp.copy_from_slice(chunk_a);
        chunk_a.copy_from_slice(chunk_b);
        chunk_b.copy_from_slice(tmp);
    }
}
