//! # Rawsort
//!
//! `rawsort` is a generic, type-erased, in-place comparison sort for
//! contiguous arrays of fixed-size records — a drop-in replacement for a
//! `qsort`-style primitive.
//!
//! It implements **introsort**: quicksort with median-of-three pivot selection
//! and Hoare partitioning, falling back to heapsort when the recursion budget
//! runs out and to insertion sort for small ranges. The algorithm never looks
//! inside a record; it only compares records through a caller-supplied
//! predicate and moves them as whole byte blocks.
//!
//! ## Key Features
//!
//! - **Type erasure**: sorts any uniformly-sized records given just a byte
//!   width and an ordering predicate — no trait bound on the element type, no
//!   knowledge of its layout.
//! - **Bounded worst case**: guaranteed O(n log n) comparisons on any input.
//!   Quicksort recursion is budgeted at `2 * floor(log2(n))` levels; once the
//!   budget is spent the remaining range is heapsorted.
//! - **Bounded auxiliary space**: recursion descends only into the smaller
//!   partition while the driver loop continues with the larger one, keeping
//!   live stack frames at O(log n). Wide records are swapped through a fixed
//!   256-byte scratch buffer, so stack usage is predictable for any width.
//! - **Dual comparator conventions**: a context-free predicate
//!   ([`rawsort`]) and a `qsort_r`-style context-carrying predicate
//!   ([`rawsort_with`]) share one driver; stateful comparator objects plug in
//!   through the [`RecordCompare`] trait and [`rawsort_by`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use rawsort::rawsort;
//!
//! let values = [5u32, 3, 8, 1, 9, 2, 7, 4, 6, 0];
//! let mut records: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//! rawsort(&mut records, 4, |a, b| {
//!     let a = u32::from_ne_bytes(a.try_into().unwrap());
//!     let b = u32::from_ne_bytes(b.try_into().unwrap());
//!     a.cmp(&b)
//! });
//!
//! let sorted: Vec<u32> = records
//!     .chunks(4)
//!     .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
//!     .collect();
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! ### Context-carrying comparators
//!
//! An opaque context reference can be threaded through every comparison,
//! mirroring the `qsort_r` convention:
//!
//! ```rust
//! use rawsort::rawsort_with;
//!
//! struct Order {
//!     descending: bool,
//! }
//!
//! let order = Order { descending: true };
//! let mut records = vec![2u8, 4, 1, 3];
//!
//! rawsort_with(&mut records, 1, &order, |a, b, order: &Order| {
//!     if order.descending { b[0].cmp(&a[0]) } else { a[0].cmp(&b[0]) }
//! });
//!
//! assert_eq!(records, vec![4, 3, 2, 1]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average case**: O(n log n) quicksort with median-of-three pivots.
//! - **Worst case**: O(n log n) via the heapsort fallback; adversarial inputs
//!   cannot degrade the sort to quadratic behavior.
//! - **Memory overhead**: one pivot buffer of `width` bytes per call, plus a
//!   fixed 256-byte swap scratch on the stack.
//!
//! Equal records may be reordered (the sort is not stable), and the comparator
//! must implement a strict weak ordering for the output guarantees to hold.

pub mod algo;
pub mod core;

pub use crate::algo::{rawsort, rawsort_by, rawsort_with};
pub use crate::core::RecordCompare;

pub mod prelude {
    pub use crate::algo::{rawsort, rawsort_by, rawsort_with};
    pub use crate::core::RecordCompare;
}
