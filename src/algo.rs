//! The introsort driver and its building blocks.
//!
//! This module implements a hybrid of:
//! - **Quicksort**: Hoare partitioning around a median-of-three pivot.
//! - **Heapsort**: fallback once the recursion budget is exhausted, keeping the
//!   worst case at O(n log n).
//! - **Insertion Sort**: fallback for small ranges.
//!
//! The main entry points are [`rawsort`], [`rawsort_with`] and [`rawsort_by`].

use crate::core::{ContextOrderingFn, OrderingFn, RecordCompare, RecordSlice};
use std::cmp::Ordering;

/// Ranges shorter than this are handed to insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 10;

/// Sorts a buffer of fixed-size records in place with a context-free
/// comparator.
///
/// The buffer is interpreted as `records.len() / width` contiguous records of
/// `width` bytes each. The records themselves are opaque: the algorithm only
/// ever compares them through `compare` and moves them as whole byte blocks.
///
/// # Arguments
///
/// * `records` - The record buffer; its length must be a multiple of `width`.
/// * `width` - Size of each record in bytes.
/// * `compare` - Ordering predicate. Must be a strict weak ordering.
///
/// A `width` of zero or a buffer holding fewer than two records is a no-op.
///
/// # Panics
///
/// Panics if `records.len()` is not a multiple of `width`.
///
/// # Examples
///
/// ```
/// use rawsort::rawsort;
///
/// let values = [5u32, 3, 8, 1, 9];
/// let mut records: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
///
/// rawsort(&mut records, 4, |a, b| {
///     let a = u32::from_ne_bytes(a.try_into().unwrap());
///     let b = u32::from_ne_bytes(b.try_into().unwrap());
///     a.cmp(&b)
/// });
///
/// let sorted: Vec<u32> = records
///     .chunks(4)
///     .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
///     .collect();
/// assert_eq!(sorted, vec![1, 3, 5, 8, 9]);
/// ```
pub fn rawsort<F>(records: &mut [u8], width: usize, compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut adapter = OrderingFn(compare);
    rawsort_by(records, width, &mut adapter);
}

/// Sorts a buffer of fixed-size records in place with a context-carrying
/// comparator.
///
/// Identical to [`rawsort`] except that an opaque caller-supplied `context`
/// reference is threaded through every comparison. This mirrors the
/// `qsort_r`-style calling convention; both conventions funnel into the same
/// driver and produce identical orderings for equivalent predicates.
///
/// # Examples
///
/// ```
/// use rawsort::rawsort_with;
///
/// // Rank table as external context: sort bytes by their rank.
/// let mut rank = [0u8; 256];
/// for (i, slot) in rank.iter_mut().enumerate() {
///     *slot = 255 - i as u8; // descending
/// }
///
/// let mut records = vec![1u8, 4, 2, 3];
/// rawsort_with(&mut records, 1, &rank, |a, b, rank| {
///     rank[a[0] as usize].cmp(&rank[b[0] as usize])
/// });
/// assert_eq!(records, vec![4, 3, 2, 1]);
/// ```
pub fn rawsort_with<X, F>(records: &mut [u8], width: usize, context: &X, compare: F)
where
    X: ?Sized,
    F: FnMut(&[u8], &[u8], &X) -> Ordering,
{
    let mut adapter = ContextOrderingFn { context, compare };
    rawsort_by(records, width, &mut adapter);
}

/// Sorts a buffer of fixed-size records in place with a [`RecordCompare`]
/// comparator object.
///
/// This is the primitive both closure-based entry points wrap. Implement
/// [`RecordCompare`] directly when the comparator carries state you want to
/// keep hold of afterwards (instrumentation, lookup tables, ...).
///
/// # Panics
///
/// Panics if `records.len()` is not a multiple of `width`.
pub fn rawsort_by<C>(records: &mut [u8], width: usize, compare: &mut C)
where
    C: RecordCompare + ?Sized,
{
    if width == 0 {
        return;
    }
    assert_eq!(
        records.len() % width,
        0,
        "record buffer length {} is not a multiple of record width {}",
        records.len(),
        width
    );

    let count = records.len() / width;
    if count < 2 {
        return;
    }

    // Quicksort levels permitted before falling back to heapsort.
    let budget = 2 * count.ilog2();

    // The pivot value must survive the partition scan while the records move
    // underneath it, so it is copied out. One buffer, allocated here once,
    // serves every partition step of the call.
    let mut pivot = Vec::with_capacity(width);

    introsort(RecordSlice::new(records, width), compare, budget, &mut pivot);
}

/// The introsort driver.
///
/// Each loop iteration strips a correctly-partitioned portion off the active
/// range: quicksort recursion descends only into the smaller partition, while
/// the larger one becomes the next iteration's active range. That keeps live
/// stack frames at O(log n) even though the total number of partition steps
/// is O(n).
fn introsort<C>(mut records: RecordSlice<'_>, compare: &mut C, mut budget: u32, pivot: &mut Vec<u8>)
where
    C: RecordCompare + ?Sized,
{
    loop {
        let n = records.len();
        if n <= 1 {
            return;
        }

        if n == 2 {
            if compare.compare(records.record(0), records.record(1)) == Ordering::Greater {
                records.swap(0, 1);
            }
            return;
        }

        if n < INSERTION_SORT_THRESHOLD {
            insertion_sort(&mut records, compare);
            return;
        }

        // Too many bad pivots in a row: finish this range with heapsort.
        if budget == 0 {
            heapsort(&mut records, compare);
            return;
        }
        budget -= 1;

        let mid = n / 2;
        sort3(&mut records, compare, 0, mid, n - 1);
        pivot.clear();
        pivot.extend_from_slice(records.record(mid));

        let split = hoare_partition(&mut records, compare, pivot);

        let (left, right) = records.split_at(split);
        if left.len() <= right.len() {
            introsort(left, compare, budget, pivot);
            records = right;
        } else {
            introsort(right, compare, budget, pivot);
            records = left;
        }
    }
}

/// In-place insertion sort over the whole range.
fn insertion_sort<C>(records: &mut RecordSlice<'_>, compare: &mut C)
where
    C: RecordCompare + ?Sized,
{
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && compare.compare(records.record(j - 1), records.record(j)) == Ordering::Greater
        {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Heapsort over the whole range: bottom-up heapify, then repeated
/// extract-max. Runs in O(n log n) on any input.
fn heapsort<C>(records: &mut RecordSlice<'_>, compare: &mut C)
where
    C: RecordCompare + ?Sized,
{
    let n = records.len();
    for top in (0..n / 2).rev() {
        sift_down(records, compare, top, n - 1);
    }
    for end in (1..n).rev() {
        records.swap(0, end);
        sift_down(records, compare, 0, end - 1);
    }
}

/// Restores the max-heap property for the subtree rooted at `top`, within the
/// heap embedded in `[0, bottom]` (children of `i` at `2i+1` and `2i+2`).
fn sift_down<C>(records: &mut RecordSlice<'_>, compare: &mut C, mut top: usize, bottom: usize)
where
    C: RecordCompare + ?Sized,
{
    while 2 * top + 1 <= bottom {
        let mut child = 2 * top + 1;
        if child + 1 <= bottom
            && compare.compare(records.record(child), records.record(child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if compare.compare(records.record(child), records.record(top)) == Ordering::Less {
            return;
        }
        records.swap(child, top);
        top = child;
    }
}

/// Median-of-three pivot selection over indices `a < b < c`: reorders the
/// three candidates so the record left at `b` is not the extreme of the
/// three. At most 3 comparisons and 2 effective swaps.
fn sort3<C>(records: &mut RecordSlice<'_>, compare: &mut C, a: usize, b: usize, c: usize)
where
    C: RecordCompare + ?Sized,
{
    if compare.compare(records.record(b), records.record(a)) != Ordering::Less {
        if compare.compare(records.record(c), records.record(b)) != Ordering::Less {
            return;
        }
        records.swap(b, c);
        if compare.compare(records.record(b), records.record(a)) == Ordering::Greater {
            records.swap(a, b);
        }
        return;
    }

    if compare.compare(records.record(c), records.record(b)) == Ordering::Greater {
        records.swap(a, c);
        return;
    }

    records.swap(a, b);
    if compare.compare(records.record(c), records.record(b)) == Ordering::Greater {
        // Degenerate tie case; the self-swap is inert.
        records.swap(b, b);
    }
}

/// Hoare partition around a copied pivot value.
///
/// Scans from both ends: the left cursor skips records ordered before the
/// pivot, the right cursor skips records ordered after it, misplaced pairs are
/// swapped, and the crossing index is returned as the split. Both sides may
/// keep records equal to the pivot. Because the pivot value sits at the middle
/// index when the scan starts, both cursors are bounded and the split always
/// lands strictly inside the range.
fn hoare_partition<C>(records: &mut RecordSlice<'_>, compare: &mut C, pivot: &[u8]) -> usize
where
    C: RecordCompare + ?Sized,
{
    let mut i = 0;
    let mut j = records.len() - 1;
    loop {
        while compare.compare(records.record(i), pivot) == Ordering::Less {
            i += 1;
        }
        while compare.compare(records.record(j), pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return i;
        }
        records.swap(i, j);
        i += 1;
        j -= 1;
    }
}
