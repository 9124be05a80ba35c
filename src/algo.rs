//! Core sorting algorithms (Spreadsort and its entry points).
//!
//! This module implements Spreadsort, a hybrid of:
//! - **MSD Radix Sort**: buckets elements by the most significant remaining key bits,
//!   with the number of bits per pass adapted to the key range and the bucket size.
//! - **Pattern-defeating Quicksort**: finishes buckets too small to be worth another
//!   radix pass, and sub-ranges whose keys are all identical.
//! - **Sorting Networks**: terminal case of the quicksort for tiny slices.
//!
//! The main entry points are [`spreadsort`], [`spreadsort_by_shift`] and [`spreadsort_by`];
//! [`spreadsort_by_extractor`] sorts with a user-defined [`KeyExtractor`].

use cuneiform::cuneiform;

use crate::config::{MAX_BINS, MIN_SORT_SIZE, Tuning};
use crate::core::{Compare, KeyExtractor, KeyOrder, KeyShift, Less, Natural, RadixKey, RightShift};
use crate::float::FloatKey;
use crate::pdqsort;

/// Sorts a slice of primitive values in ascending order.
///
/// Works for every integer type, `bool`, `char`, `f32` and `f64`. Floats are ordered
/// by their total-order key: `-0.0` sorts right before `0.0`, and NaNs end up at the
/// ends of the slice (by sign bit). Equal keys are not kept in their original order.
///
/// # Examples
///
/// ```
/// use spreadsort::spreadsort;
///
/// let mut data = vec![5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
/// spreadsort(&mut data);
/// assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
///
/// let mut floats = vec![1.5, -0.0, 0.0, -2.25, 3.75];
/// spreadsort(&mut floats);
/// assert_eq!(floats[0], -2.25);
/// assert_eq!(floats[3..], [1.5, 3.75]);
/// ```
pub fn spreadsort<T>(v: &mut [T])
where
    Natural: KeyExtractor<T>,
{
    spreadsort_by_extractor(v, Natural);
}

/// Sorts a slice by the keys `extractor` produces, with the radix heuristics of
/// [`KeyExtractor::TUNING`].
///
/// # Examples
///
/// ```
/// use spreadsort::{KeyExtractor, spreadsort_by_extractor};
///
/// struct Reading {
///     sensor: u16,
///     millis: u32,
/// }
///
/// struct BySensorThenTime;
///
/// impl KeyExtractor<Reading> for BySensorThenTime {
///     type Key = u64;
///
///     fn extract(&self, r: &Reading) -> u64 {
///         ((r.sensor as u64) << 32) | r.millis as u64
///     }
/// }
///
/// let mut readings: Vec<Reading> = (0..4000u32)
///     .map(|i| Reading { sensor: (i % 3) as u16, millis: (i * 7919) % 4000 })
///     .collect();
/// spreadsort_by_extractor(&mut readings, BySensorThenTime);
///
/// assert!(readings
///     .windows(2)
///     .all(|w| (w[0].sensor, w[0].millis) <= (w[1].sensor, w[1].millis)));
/// ```
pub fn spreadsort_by_extractor<T, E>(v: &mut [T], extractor: E)
where
    E: KeyExtractor<T>,
{
    dispatch(v, &KeyShift(&extractor), &KeyOrder(&extractor), &E::TUNING);
}

/// Sorts a slice by the natural key of the value `key` returns for each element.
///
/// `key` runs several times per element, so it should be cheap, typically a field
/// access.
///
/// # Examples
///
/// ```
/// use spreadsort::spreadsort_by_key;
///
/// struct Order {
///     id: u32,
///     price_cents: i64,
/// }
///
/// let mut orders: Vec<Order> = (0..3000)
///     .map(|id| Order { id, price_cents: (id as i64 * 7919) % 1000 - 500 })
///     .collect();
/// spreadsort_by_key(&mut orders, |o| o.price_cents);
///
/// assert!(orders.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));
/// ```
pub fn spreadsort_by_key<T, K, F>(v: &mut [T], key: F)
where
    F: Fn(&T) -> K,
    Natural: KeyExtractor<K>,
{
    let tuning = <Natural as KeyExtractor<K>>::TUNING;
    let shift = |value: &T, offset: u32| Natural.extract(&key(value)) >> offset;
    let compare = |a: &T, b: &T| Natural.extract(&key(a)) < Natural.extract(&key(b));
    dispatch(v, &shift, &compare, &tuning);
}

/// Sorts a slice using a caller-supplied [`RightShift`] and the `<` operator.
///
/// The key `shift(x, 0)` must be ascending with `<`: if `a < b` then
/// `shift(a, 0) <= shift(b, 0)`.
///
/// # Examples
///
/// ```
/// use spreadsort::spreadsort_by_shift;
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Version(u16, u16);
///
/// let mut versions: Vec<Version> = (0..5000u32)
///     .rev()
///     .map(|i| Version((i / 100) as u16, (i % 100) as u16))
///     .collect();
///
/// spreadsort_by_shift(&mut versions, |v: &Version, offset: u32| {
///     (((v.0 as u32) << 16) | v.1 as u32) >> offset
/// });
///
/// assert!(versions.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn spreadsort_by_shift<T, R>(v: &mut [T], shift: R)
where
    T: PartialOrd,
    R: RightShift<T>,
{
    dispatch(v, &shift, &Less, &Tuning::INTEGER);
}

/// Sorts a slice using a caller-supplied [`RightShift`] and [`Compare`].
///
/// `compare` must be a strict weak ordering, and the key `shift(x, 0)` must be
/// monotonic with it: if `compare(a, b)` then `shift(a, 0) <= shift(b, 0)`. Keys may
/// be coarser than the ordering; elements with equal keys are finished by comparison.
///
/// # Examples
///
/// Descending order by inverting the key:
///
/// ```
/// use spreadsort::spreadsort_by;
///
/// let mut data: Vec<u32> = (0..4000).collect();
/// spreadsort_by(&mut data, |x: &u32, offset: u32| !*x >> offset, |a: &u32, b: &u32| a > b);
///
/// assert_eq!(data[0], 3999);
/// assert_eq!(data[3999], 0);
/// ```
pub fn spreadsort_by<T, R, C>(v: &mut [T], shift: R, compare: C)
where
    R: RightShift<T>,
    C: Compare<T>,
{
    dispatch(v, &shift, &compare, &Tuning::INTEGER);
}

/// Sorts a slice of floats by their total-order key.
///
/// Same ordering as [`spreadsort`] on `f32`/`f64`.
pub fn float_sort<F: FloatKey>(v: &mut [F]) {
    let shift = |value: &F, offset: u32| value.total_order_key() >> offset;
    let compare = |a: &F, b: &F| a.total_order_key() < b.total_order_key();
    dispatch(v, &shift, &compare, &Tuning::FLOAT);
}

/// Like [`spreadsort_by_shift`], tuned for keys built with the float total-order cast.
///
/// # Examples
///
/// ```
/// use spreadsort::{float_sort_by_shift, float_total_order};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Sample {
///     value: f32,
/// }
///
/// let mut samples: Vec<Sample> = (0..3000)
///     .map(|i| Sample { value: ((i * 37) % 3000) as f32 - 1500.5 })
///     .collect();
///
/// float_sort_by_shift(&mut samples, |s: &Sample, offset: u32| {
///     float_total_order(s.value) >> offset
/// });
///
/// assert!(samples.windows(2).all(|w| w[0].value <= w[1].value));
/// ```
pub fn float_sort_by_shift<T, R>(v: &mut [T], shift: R)
where
    T: PartialOrd,
    R: RightShift<T>,
{
    dispatch(v, &shift, &Less, &Tuning::FLOAT);
}

/// Like [`spreadsort_by`], tuned for keys built with the float total-order cast.
pub fn float_sort_by<T, R, C>(v: &mut [T], shift: R, compare: C)
where
    R: RightShift<T>,
    C: Compare<T>,
{
    dispatch(v, &shift, &compare, &Tuning::FLOAT);
}

/// Picks between the comparison fallback and the radix engine.
fn dispatch<T, R, C>(v: &mut [T], shift: &R, compare: &C, tuning: &Tuning)
where
    R: RightShift<T>,
    C: Compare<T>,
{
    if v.len() < MIN_SORT_SIZE {
        pdqsort::sort_by(v, |a, b| compare.is_less(a, b));
        return;
    }

    log::trace!(
        "spreadsort: {} elements, {}-bit keys, {:?}",
        v.len(),
        <R::Key as RadixKey>::BITS,
        tuning
    );
    spread_sort(v, shift, compare, tuning);
}

/// Per-pass bucket bookkeeping, reused across passes.
#[cuneiform]
struct BinTable {
    /// Number of elements per bucket.
    sizes: [usize; MAX_BINS],
    /// Next unfilled slot of each bucket while elements are being moved.
    cursors: [usize; MAX_BINS],
}

/// A sub-range still waiting for a radix pass, and the number of low key bits in
/// which its elements may still differ.
#[derive(Clone, Copy, Debug)]
struct Pending {
    start: usize,
    end: usize,
    budget: u32,
}

/// Spreadsort engine.
///
/// Works through a stack of pending sub-ranges. Each pass buckets one sub-range by
/// its most significant remaining key bits, sorts small buckets with the comparison
/// fallback, and pushes the large ones back with a smaller bit budget. The budget
/// shrinks on every pass, so no sub-range is visited more than `key bits` times.
fn spread_sort<T, R, C>(v: &mut [T], shift: &R, compare: &C, tuning: &Tuning)
where
    R: RightShift<T>,
    C: Compare<T>,
{
    let mut is_less = |a: &T, b: &T| compare.is_less(a, b);
    let mut bins = Box::new(BinTable {
        sizes: [0; MAX_BINS],
        cursors: [0; MAX_BINS],
    });
    let mut pending = vec![Pending {
        start: 0,
        end: v.len(),
        budget: <R::Key as RadixKey>::BITS,
    }];

    while let Some(task) = pending.pop() {
        spread_pass(v, task, shift, &mut is_less, tuning, &mut bins, &mut pending);
    }
}

/// One radix pass over `v[task.start..task.end]`.
fn spread_pass<T, R, F>(
    v: &mut [T],
    task: Pending,
    shift: &R,
    is_less: &mut F,
    tuning: &Tuning,
    bins: &mut BinTable,
    pending: &mut Vec<Pending>,
) where
    R: RightShift<T>,
    F: FnMut(&T, &T) -> bool,
{
    let range = &mut v[task.start..task.end];
    let len = range.len();

    let Some((min, max)) = sorted_or_extremes(range, shift, is_less) else {
        return;
    };

    let log_range = (max - min).bit_len();
    debug_assert!(
        log_range <= task.budget,
        "key range of {log_range} bits exceeds the {} bits left; shift is not consistent",
        task.budget
    );

    // Every key is identical: no bits left to split on.
    if log_range == 0 {
        log::debug!("spreadsort: {len} elements share one key, falling back");
        pdqsort::sort_by(range, &mut *is_less);
        return;
    }

    let log_divisor = tuning.log_divisor(len, log_range);
    let div_min = min >> log_divisor;
    let bin_count = ((max >> log_divisor) - div_min).as_index() + 1;
    debug_assert!(bin_count <= MAX_BINS);

    let bucket = |value: &T| (shift.shift(value, log_divisor) - div_min).as_index();
    let BinTable { sizes, cursors } = bins;
    let sizes = &mut sizes[..bin_count];
    let cursors = &mut cursors[..bin_count];

    sizes.fill(0);
    range.iter().for_each(|value| sizes[bucket(value)] += 1);

    // `log_divisor < log_range` puts `max - min >= 2^log_divisor`, so the smallest and
    // largest keys never share a bucket and every pass splits the range.
    debug_assert!(sizes[0] < len && sizes[bin_count - 1] < len);

    let mut offset = 0;
    cursors.iter_mut().zip(sizes.iter()).for_each(|(cursor, &size)| {
        *cursor = offset;
        offset += size;
    });

    // Cycle every element into its bucket. Buckets before `current` are complete, so
    // only buckets after it can receive elements.
    let mut bucket_end = 0;
    for current in 0..bin_count - 1 {
        bucket_end += sizes[current];
        let mut pos = cursors[current];
        while pos < bucket_end {
            let mut target = bucket(&range[pos]);
            while target != current {
                range.swap(pos, cursors[target]);
                cursors[target] += 1;
                target = bucket(&range[pos]);
            }
            pos += 1;
        }
        cursors[current] = bucket_end;
    }

    let min_split = tuning.min_count(log_divisor);
    let mut start = 0;
    for &size in sizes.iter() {
        let end = start + size;
        if size >= 2 {
            if log_divisor == 0 || size < min_split {
                pdqsort::sort_by(&mut range[start..end], &mut *is_less);
            } else {
                pending.push(Pending {
                    start: task.start + start,
                    end: task.start + end,
                    budget: log_divisor,
                });
            }
        }
        start = end;
    }
}

/// Returns `None` if `v` is already sorted, otherwise the smallest and largest keys.
fn sorted_or_extremes<T, R, F>(v: &[T], shift: &R, is_less: &mut F) -> Option<(R::Key, R::Key)>
where
    R: RightShift<T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut i = 1;
    while i < v.len() && !is_less(&v[i], &v[i - 1]) {
        i += 1;
    }
    if i >= v.len() {
        return None;
    }

    // Elements the ordering treats as equal may still carry different keys (`-0.0` and
    // `0.0` under `<`), so the sorted prefix is scanned as well.
    let mut min = shift.shift(&v[0], 0);
    let mut max = min;
    for value in &v[1..] {
        let key = shift.shift(value, 0);
        if key < min {
            min = key;
        } else if key > max {
            max = key;
        }
    }

    Some((min, max))
}
