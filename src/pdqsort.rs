//! Pattern-defeating quicksort, the comparison fallback of the radix engine.
//!
//! Unstable, in-place, *O*(*n* \* log(*n*)) worst case. Slices of up to
//! [`MAX_NETWORK_SIZE`](crate::network::MAX_NETWORK_SIZE) elements are finished with the
//! fixed sorting networks. Already sorted, reversed and duplicate-heavy inputs are
//! detected and handled in linear time, and too many unbalanced partitions switch
//! the remaining slice to heapsort.
//!
//! The comparator only needs to be a strict weak ordering for the result to be
//! sorted. A comparator that is not one yields an unspecified permutation of the
//! input, but never panics or loses elements.

use std::cmp;

use crate::network::{self, MAX_NETWORK_SIZE};

/// Sorts `v` in ascending order.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
/// spreadsort::pdqsort::sort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a < b);
}

/// Sorts `v` with `is_less`, which returns `true` when its first argument sorts
/// strictly before its second.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    // Limit the number of imbalanced partitions to the bit length of `len`.
    let limit = usize::BITS - v.len().leading_zeros();

    recurse(v, &mut is_less, None, limit);
}

/// Sorts `v` by comparing the values `projection` returns for each element.
///
/// The projection runs on every comparison, so it should be cheap.
///
/// # Examples
///
/// ```
/// let mut words = ["pear", "fig", "banana", "kiwi"];
/// spreadsort::pdqsort::sort_by_projection(&mut words, |w| w.len(), |a, b| a < b);
/// assert_eq!(words[0], "fig");
/// assert_eq!(words[3], "banana");
/// ```
pub fn sort_by_projection<T, K, P, F>(v: &mut [T], mut projection: P, mut is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    sort_by(v, |a, b| is_less(&projection(a), &projection(b)));
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `pred`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to heapsort.
fn recurse<'a, T, F>(mut v: &'a mut [T], is_less: &mut F, mut pred: Option<&'a T>, mut limit: u32)
where
    F: FnMut(&T, &T) -> bool,
{
    // True if the last partitioning was reasonably balanced.
    let mut was_balanced = true;
    // True if the last partitioning didn't shuffle elements.
    let mut was_partitioned = true;

    loop {
        let len = v.len();

        if len <= MAX_NETWORK_SIZE {
            network::sort_small(v, is_less);
            return;
        }

        if limit == 0 {
            heapsort(v, is_less);
            return;
        }

        if !was_balanced {
            break_patterns(v);
            limit -= 1;
        }

        let (pivot, likely_sorted) = choose_pivot(v, is_less);

        if was_balanced && was_partitioned && likely_sorted && partial_insertion_sort(v, is_less) {
            return;
        }

        // A pivot equal to the predecessor is the smallest element of the slice: split off
        // everything equal to it and keep going with the rest.
        if let Some(p) = pred {
            if !is_less(p, &v[pivot]) {
                let mid = partition_equal(v, pivot, is_less);
                v = &mut v[mid..];
                continue;
            }
        }

        let (mid, was_p) = partition(v, pivot, is_less);
        was_balanced = cmp::min(mid, len - mid) >= len / 8;
        was_partitioned = was_p;

        let (left, right) = v.split_at_mut(mid);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = &pivot[0];

        // Recurse into the shorter side, loop on the longer one.
        if left.len() < right.len() {
            recurse(left, is_less, pred, limit);
            v = right;
            pred = Some(pivot);
        } else {
            recurse(right, is_less, Some(pivot), limit);
            v = left;
        }
    }
}

/// Partitions `v` into elements smaller than `v[pivot]`, followed by elements greater
/// than or equal to it.
///
/// Returns the final index of the pivot and whether `v` was already partitioned.
fn partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    v.swap(0, pivot);
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let mut l = 0;
    let mut r = rest.len();

    while l < r && is_less(&rest[l], pivot) {
        l += 1;
    }
    while l < r && !is_less(&rest[r - 1], pivot) {
        r -= 1;
    }
    let was_partitioned = l >= r;

    loop {
        while l < r && is_less(&rest[l], pivot) {
            l += 1;
        }
        while l < r && !is_less(&rest[r - 1], pivot) {
            r -= 1;
        }
        if l >= r {
            break;
        }
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    v.swap(0, l);
    (l, was_partitioned)
}

/// Partitions `v` into elements equal to `v[pivot]` followed by elements greater than it,
/// assuming no element is smaller than the pivot.
///
/// Returns the number of elements equal to the pivot.
fn partition_equal<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    v.swap(0, pivot);
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let mut l = 0;
    let mut r = rest.len();
    loop {
        while l < r && !is_less(pivot, &rest[l]) {
            l += 1;
        }
        while l < r && is_less(pivot, &rest[r - 1]) {
            r -= 1;
        }
        if l >= r {
            break;
        }
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    // Count the pivot itself.
    l + 1
}

/// Partially sorts a slice by shifting several out-of-order elements around.
///
/// Returns `true` if the slice is sorted at the end.
#[cold]
fn partial_insertion_sort<T, F>(v: &mut [T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    // Maximum number of adjacent out-of-order pairs that will get shifted.
    const MAX_STEPS: usize = 5;
    // If the slice is shorter than this, don't shift any elements.
    const SHORTEST_SHIFTING: usize = 50;

    let len = v.len();
    let mut i = 1;

    for _ in 0..MAX_STEPS {
        while i < len && !is_less(&v[i], &v[i - 1]) {
            i += 1;
        }

        if i == len {
            return true;
        }

        // Don't shift elements on short arrays, that has a performance cost.
        if len < SHORTEST_SHIFTING {
            return false;
        }

        v.swap(i - 1, i);

        if i >= 2 {
            shift_tail(&mut v[..i], is_less);
            shift_head(&mut v[i..], is_less);
        }
    }

    false
}

/// Moves the last element left until it is in sorted position.
fn shift_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;
    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}

/// Moves the first element right until it is in sorted position.
fn shift_head<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = 0;
    while i + 1 < v.len() && is_less(&v[i + 1], &v[i]) {
        v.swap(i, i + 1);
        i += 1;
    }
}

/// Sorts `v` using heapsort, which is *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }

    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[node], &v[child]) {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}

/// Scatters some elements around in an attempt to break patterns that might cause
/// imbalanced partitions.
#[cold]
fn break_patterns<T>(v: &mut [T]) {
    let len = v.len();
    if len < 8 {
        return;
    }

    // Xorshift RNG seeded with the length, so the shuffle is deterministic.
    let mut random = len as u32;
    let mut gen_u32 = || {
        random ^= random << 13;
        random ^= random >> 17;
        random ^= random << 5;
        random
    };
    let mut gen_usize = || {
        if usize::BITS <= 32 {
            gen_u32() as usize
        } else {
            (((gen_u32() as u64) << 32) | (gen_u32() as u64)) as usize
        }
    };

    let modulus = len.next_power_of_two();
    let pos = len / 4 * 2;

    for i in 0..3 {
        let mut other = gen_usize() & (modulus - 1);
        if other >= len {
            other -= len;
        }
        v.swap(pos - 1 + i, other);
    }
}

/// Chooses a pivot in `v` and returns its index and `true` if the slice is likely
/// already sorted.
///
/// Elements in `v` might be reordered in the process.
fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    // Shorter slices use the simple median-of-three method.
    const SHORTEST_MEDIAN_OF_MEDIANS: usize = 50;
    // Maximum number of swaps that can be performed in this function.
    const MAX_SWAPS: usize = 4 * 3;

    let len = v.len();
    debug_assert!(len > MAX_NETWORK_SIZE);

    let mut a = len / 4;
    let mut b = len / 4 * 2;
    let mut c = len / 4 * 3;
    let mut swaps = 0;

    if len >= SHORTEST_MEDIAN_OF_MEDIANS {
        for mid in [&mut a, &mut b, &mut c] {
            let mut lo = *mid - 1;
            let mut hi = *mid + 1;
            sort3_idx(v, &mut lo, mid, &mut hi, &mut swaps, is_less);
        }
    }

    sort3_idx(v, &mut a, &mut b, &mut c, &mut swaps, is_less);

    if swaps < MAX_SWAPS {
        (b, swaps == 0)
    } else {
        // Most likely descending; reversing helps.
        v.reverse();
        (len - 1 - b, true)
    }
}

/// Swaps indices so that `v[a] <= v[b]`.
#[inline]
fn sort2_idx<T, F>(v: &[T], a: &mut usize, b: &mut usize, swaps: &mut usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[*b], &v[*a]) {
        std::mem::swap(a, b);
        *swaps += 1;
    }
}

/// Swaps indices so that `v[a] <= v[b] <= v[c]`.
#[inline]
fn sort3_idx<T, F>(
    v: &[T],
    a: &mut usize,
    b: &mut usize,
    c: &mut usize,
    swaps: &mut usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    sort2_idx(v, a, b, swaps, is_less);
    sort2_idx(v, b, c, swaps, is_less);
    sort2_idx(v, a, b, swaps, is_less);
}
