//! # Spreadsort
//!
//! `spreadsort` is an in-memory, in-place sorting library for keys that reduce to a
//! fixed-width unsigned integer: native integers, IEEE-754 floats, and any type you can
//! map onto such a key.
//!
//! It implements **Spreadsort**, a hybrid of most-significant-digit **Radix Sort** and
//! **Pattern-defeating Quicksort**, which buckets elements by their high key bits while
//! that pays off and falls back to comparisons when it does not.
//!
//! ## Key Features
//!
//! - **Adaptive Radix Passes**: Each pass looks at the actual key range of the bucket
//!   and picks how many bits to consume, so clustered data is not split on bits that
//!   never vary.
//! - **Comparison Fallback**: Small buckets, tiny inputs and degenerate distributions are
//!   finished by a pattern-defeating quicksort with an *O*(*n* \* log(*n*)) worst case.
//! - **Sorting Networks**: Slices of up to 32 elements are sorted with fixed
//!   compare-exchange sequences (see [`network`]).
//! - **Float Total Order**: Floats are sorted through a bit cast that makes the unsigned
//!   integer order match the numeric order (see [`float_total_order`]).
//! - **In-Place**: The only allocations are the bucket tables and a work list; elements
//!   are never copied out of the slice.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Primitive types sort with [`spreadsort`]:
//!
//! ```rust
//! use spreadsort::spreadsort;
//!
//! let mut data = vec![5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
//! spreadsort(&mut data);
//!
//! assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
//! ```
//!
//! ### Custom Types
//!
//! Supply a right-shift closure returning the element's key shifted right by the given
//! number of bits, and optionally an ordering consistent with it.
//!
//! ```rust
//! use spreadsort::{spreadsort_by, spreadsort_by_shift};
//!
//! #[derive(Debug, PartialEq, PartialOrd)]
//! struct Event {
//!     timestamp: u64,
//! }
//!
//! let mut events: Vec<Event> = (0..5000u64)
//!     .map(|i| Event { timestamp: (i * 7919) % 5000 })
//!     .collect();
//!
//! // Ascending, using `<` as the ordering.
//! spreadsort_by_shift(&mut events, |e: &Event, offset: u32| e.timestamp >> offset);
//! assert_eq!(events[0].timestamp, 0);
//!
//! // Descending: invert the key and the ordering together.
//! spreadsort_by(
//!     &mut events,
//!     |e: &Event, offset: u32| !e.timestamp >> offset,
//!     |a: &Event, b: &Event| a.timestamp > b.timestamp,
//! );
//! assert_eq!(events[0].timestamp, 4999);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: *O*(*n*) for already sorted input and for keys that a single pass
//!   separates.
//! - **Typical Case**: *O*(*n* \* *k* / *s*) for *k*-bit keys consumed *s* bits per pass,
//!   up to 11 or 12 bits at a time.
//! - **Worst Case**: never worse than the *O*(*n* \* log(*n*)) comparison fallback, plus
//!   at most one radix pass per 11 key bits.
//! - **Stability**: not stable; equal keys may be reordered.
//!
//! Inputs shorter than [`MIN_SORT_SIZE`](config::MIN_SORT_SIZE) are sorted by the
//! comparison fallback alone.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod float;
pub mod network;
pub mod pdqsort;

pub use crate::algo::{
    float_sort, float_sort_by, float_sort_by_shift, spreadsort, spreadsort_by,
    spreadsort_by_extractor, spreadsort_by_key, spreadsort_by_shift,
};
pub use crate::core::{Compare, KeyExtractor, RadixKey, RightShift};
pub use crate::error::{Result, SortError};
pub use crate::float::{FloatKey, float_mem_cast, float_total_order};

pub mod prelude {
    pub use crate::algo::{
        float_sort, float_sort_by, float_sort_by_shift, spreadsort, spreadsort_by,
        spreadsort_by_extractor, spreadsort_by_key, spreadsort_by_shift,
    };
    pub use crate::core::{Compare, KeyExtractor, KeyOrder, KeyShift, Less, Natural, RightShift};
    pub use crate::float::{float_mem_cast, float_total_order};
}
