//! Fixed-size sorting networks.
//!
//! Each table is a fixed sequence of compare-exchange pairs `(a, b)` with `a < b`:
//! the element at `b` is swapped into `a` when it sorts strictly before it. Applying
//! a table to a slice of exactly its size sorts every permutation of that size, with
//! a comparison sequence that does not depend on the input.
//!
//! Sizes up to 16 have their own table. Sizes 17 to 32 sort the first 16 elements and
//! the remaining `len - 16` with the smaller tables, then finish with a fixed merge
//! table for that size.

use crate::error::{Result, SortError};

/// Largest slice length with a sorting network.
pub const MAX_NETWORK_SIZE: usize = 32;

/// Length of the left half in composed networks.
const SPLIT: usize = 16;

/// Sorts `v` with the network for its length.
///
/// # Errors
///
/// Returns [`SortError::UnsupportedNetworkSize`] if `v` is longer than
/// [`MAX_NETWORK_SIZE`].
///
/// # Examples
///
/// ```
/// use spreadsort::network;
///
/// let mut data = [9, 4, 7, 1, 8];
/// network::sort(&mut data).unwrap();
/// assert_eq!(data, [1, 4, 7, 8, 9]);
/// ```
pub fn sort<T: Ord>(v: &mut [T]) -> Result<()> {
    sort_by(v, |a, b| a < b)
}

/// Sorts `v` with the network for its length, using `is_less` for every
/// compare-exchange.
///
/// # Errors
///
/// Returns [`SortError::UnsupportedNetworkSize`] if `v` is longer than
/// [`MAX_NETWORK_SIZE`].
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() > MAX_NETWORK_SIZE {
        return Err(SortError::UnsupportedNetworkSize {
            len: v.len(),
            max: MAX_NETWORK_SIZE,
        });
    }
    sort_small(v, &mut is_less);
    Ok(())
}

/// Returns the full compare-exchange sequence used for slices of length `len`, or
/// `None` if `len` exceeds [`MAX_NETWORK_SIZE`].
pub fn comparators(len: usize) -> Option<Vec<(usize, usize)>> {
    fn widen(table: &[(u8, u8)], offset: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        table
            .iter()
            .map(move |&(a, b)| (a as usize + offset, b as usize + offset))
    }

    match len {
        0..=SPLIT => Some(widen(NETWORKS[len], 0).collect()),
        17..=MAX_NETWORK_SIZE => Some(
            widen(NETWORKS[SPLIT], 0)
                .chain(widen(NETWORKS[len - SPLIT], SPLIT))
                .chain(widen(MERGES[len - SPLIT], 0))
                .collect(),
        ),
        _ => None,
    }
}

/// Sorts a slice of at most [`MAX_NETWORK_SIZE`] elements.
#[inline]
pub(crate) fn sort_small<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len <= MAX_NETWORK_SIZE);

    if len <= SPLIT {
        apply(v, NETWORKS[len], is_less);
    } else {
        let (left, right) = v.split_at_mut(SPLIT);
        apply(left, NETWORKS[SPLIT], is_less);
        apply(right, NETWORKS[len - SPLIT], is_less);
        apply(v, MERGES[len - SPLIT], is_less);
    }
}

#[inline(always)]
fn apply<T, F>(v: &mut [T], network: &[(u8, u8)], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for &(a, b) in network {
        swap_if(v, a as usize, b as usize, is_less);
    }
}

#[inline(always)]
fn swap_if<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Only swap on strict inequality, so equal elements never move.
    if is_less(&v[b], &v[a]) {
        v.swap(a, b);
    }
}

static NETWORKS: [&[(u8, u8)]; SPLIT + 1] = [
    &[], &[], SORT2, SORT3, SORT4, SORT5, SORT6, SORT7, SORT8, SORT9, SORT10, SORT11, SORT12,
    SORT13, SORT14, SORT15, SORT16,
];

// Indexed by `len - SPLIT`.
static MERGES: [&[(u8, u8)]; MAX_NETWORK_SIZE - SPLIT + 1] = [
    &[], MERGE17, MERGE18, MERGE19, MERGE20, MERGE21, MERGE22, MERGE23, MERGE24, MERGE25,
    MERGE26, MERGE27, MERGE28, MERGE29, MERGE30, MERGE31, MERGE32,
];

const SORT2: &[(u8, u8)] = &[
    (0, 1),
];

const SORT3: &[(u8, u8)] = &[
    (0, 2), (0, 1), (1, 2),
];

const SORT4: &[(u8, u8)] = &[
    (0, 2), (1, 3), (0, 1), (2, 3), (1, 2),
];

const SORT5: &[(u8, u8)] = &[
    (0, 4), (0, 2), (1, 3), (2, 4), (0, 1), (2, 3), (1, 4), (1, 2), (3, 4),
];

const SORT6: &[(u8, u8)] = &[
    (0, 4), (1, 5), (0, 2), (1, 3), (2, 4), (3, 5), (0, 1), (2, 3), (4, 5), (1, 4), (1, 2), (3, 4),
];

const SORT7: &[(u8, u8)] = &[
    (0, 4), (1, 5), (2, 6), (0, 2), (1, 3), (4, 6), (2, 4), (3, 5), (0, 1), (2, 3), (4, 5), (1, 4),
    (3, 6), (1, 2), (3, 4), (5, 6),
];

const SORT8: &[(u8, u8)] = &[
    (0, 4), (1, 5), (2, 6), (3, 7), (0, 2), (1, 3), (4, 6), (5, 7), (2, 4), (3, 5), (0, 1), (2, 3),
    (4, 5), (6, 7), (1, 4), (3, 6), (1, 2), (3, 4), (5, 6),
];

const SORT9: &[(u8, u8)] = &[
    (0, 3), (1, 7), (2, 5), (4, 8), (0, 7), (2, 4), (3, 8), (5, 6), (0, 2), (1, 3), (4, 5), (7, 8),
    (1, 4), (3, 6), (5, 7), (0, 1), (2, 4), (3, 5), (6, 8), (2, 3), (4, 5), (6, 7), (1, 2), (3, 4),
    (5, 6),
];

const SORT10: &[(u8, u8)] = &[
    (0, 8), (1, 7), (2, 6), (5, 9), (0, 1), (2, 5), (3, 4), (6, 9), (7, 8), (0, 2), (1, 6), (0, 3),
    (1, 2), (4, 6), (5, 7), (1, 4), (3, 5), (6, 8), (1, 3), (2, 5), (6, 9), (2, 3), (4, 5), (6, 7),
    (8, 9), (4, 6), (5, 7), (3, 4), (5, 6), (7, 8),
];

const SORT11: &[(u8, u8)] = &[
    (0, 8), (1, 7), (2, 6), (4, 10), (5, 9), (0, 1), (2, 5), (3, 4), (6, 9), (7, 8), (0, 2),
    (1, 6), (5, 10), (0, 3), (1, 2), (4, 6), (5, 7), (9, 10), (1, 4), (3, 5), (6, 8), (7, 10),
    (1, 3), (2, 5), (6, 9), (8, 10), (2, 3), (4, 5), (6, 7), (8, 9), (4, 6), (5, 7), (3, 4),
    (5, 6), (7, 8),
];

const SORT12: &[(u8, u8)] = &[
    (0, 8), (1, 7), (2, 6), (3, 11), (4, 10), (5, 9), (0, 1), (2, 5), (3, 4), (6, 9), (7, 8),
    (10, 11), (0, 2), (1, 6), (5, 10), (9, 11), (0, 3), (1, 2), (4, 6), (5, 7), (8, 11), (9, 10),
    (1, 4), (3, 5), (6, 8), (7, 10), (1, 3), (2, 5), (6, 9), (8, 10), (2, 3), (4, 5), (6, 7),
    (8, 9), (4, 6), (5, 7), (3, 4), (5, 6), (7, 8),
];

const SORT13: &[(u8, u8)] = &[
    (0, 12), (1, 10), (2, 9), (3, 7), (5, 11), (6, 8), (1, 6), (2, 3), (4, 11), (7, 9), (8, 10),
    (0, 4), (1, 2), (3, 6), (7, 8), (9, 10), (11, 12), (4, 6), (5, 9), (8, 11), (10, 12), (0, 5),
    (3, 8), (4, 7), (6, 11), (9, 10), (0, 1), (2, 5), (6, 9), (7, 8), (10, 11), (1, 3), (2, 4),
    (5, 6), (9, 10), (1, 2), (3, 4), (5, 7), (6, 8), (2, 3), (4, 5), (6, 7), (8, 9), (3, 4),
    (5, 6),
];

const SORT14: &[(u8, u8)] = &[
    (0, 13), (1, 12), (4, 8), (5, 6), (7, 11), (9, 10), (0, 5), (1, 7), (2, 9), (3, 4), (6, 13),
    (11, 12), (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13), (0, 2), (1, 3), (4, 10),
    (5, 11), (6, 7), (8, 9), (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11), (1, 4), (2, 6),
    (5, 8), (7, 10), (9, 13), (2, 4), (3, 6), (9, 12), (11, 13), (3, 5), (6, 8), (7, 9), (10, 12),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (6, 7), (8, 9),
];

const SORT15: &[(u8, u8)] = &[
    (0, 13), (1, 12), (3, 14), (4, 8), (5, 6), (7, 11), (9, 10), (0, 5), (1, 7), (2, 9), (3, 4),
    (6, 13), (8, 14), (11, 12), (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13), (0, 2),
    (1, 3), (4, 10), (5, 11), (6, 7), (8, 9), (12, 14), (1, 2), (3, 12), (4, 6), (5, 7), (8, 10),
    (9, 11), (13, 14), (1, 4), (2, 6), (5, 8), (7, 10), (9, 13), (11, 14), (2, 4), (3, 6), (9, 12),
    (11, 13), (3, 5), (6, 8), (7, 9), (10, 12), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (6, 7),
    (8, 9),
];

const SORT16: &[(u8, u8)] = &[
    (0, 13), (1, 12), (2, 15), (3, 14), (4, 8), (5, 6), (7, 11), (9, 10), (0, 5), (1, 7), (2, 9),
    (3, 4), (6, 13), (8, 14), (10, 15), (11, 12), (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11),
    (12, 13), (14, 15), (0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9), (12, 14), (13, 15),
    (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11), (13, 14), (1, 4), (2, 6), (5, 8), (7, 10),
    (9, 13), (11, 14), (2, 4), (3, 6), (9, 12), (11, 13), (3, 5), (6, 8), (7, 9), (10, 12), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (6, 7), (8, 9),
];

const MERGE17: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 8), (12, 16), (2, 4), (6, 8), (10, 12), (14, 16), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
];

const MERGE18: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 8), (12, 16), (2, 4), (6, 8), (10, 12), (14, 16), (1, 17), (9, 17),
    (5, 9), (13, 17), (3, 5), (7, 9), (11, 13), (15, 17), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10),
    (11, 12), (13, 14), (15, 16),
];

const MERGE19: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 8), (12, 16), (2, 18), (10, 18), (6, 10), (14, 18), (2, 4), (6, 8),
    (10, 12), (14, 16), (1, 17), (9, 17), (5, 9), (13, 17), (3, 5), (7, 9), (11, 13), (15, 17),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
];

const MERGE20: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 8), (12, 16), (2, 18), (10, 18), (6, 10), (14, 18), (2, 4), (6, 8),
    (10, 12), (14, 16), (1, 17), (9, 17), (5, 9), (13, 17), (3, 19), (11, 19), (7, 11), (15, 19),
    (3, 5), (7, 9), (11, 13), (15, 17), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (15, 16), (17, 18),
];

const MERGE21: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (2, 18), (10, 18), (6, 10), (14, 18),
    (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (1, 17), (9, 17), (5, 9), (13, 17), (3, 19),
    (11, 19), (7, 11), (15, 19), (3, 5), (7, 9), (11, 13), (15, 17), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
];

const MERGE22: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (2, 18), (10, 18), (6, 10), (14, 18),
    (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (1, 17), (9, 17), (5, 21), (13, 21), (5, 9),
    (13, 17), (3, 19), (11, 19), (7, 11), (15, 19), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
];

const MERGE23: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (2, 18), (10, 18), (6, 22), (14, 22),
    (6, 10), (14, 18), (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (1, 17), (9, 17), (5, 21),
    (13, 21), (5, 9), (13, 17), (3, 19), (11, 19), (7, 11), (15, 19), (3, 5), (7, 9), (11, 13),
    (15, 17), (19, 21), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
    (17, 18), (19, 20), (21, 22),
];

const MERGE24: &[(u8, u8)] = &[
    (0, 16), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (2, 18), (10, 18), (6, 22), (14, 22),
    (6, 10), (14, 18), (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (1, 17), (9, 17), (5, 21),
    (13, 21), (5, 9), (13, 17), (3, 19), (11, 19), (7, 23), (15, 23), (7, 11), (15, 19), (3, 5),
    (7, 9), (11, 13), (15, 17), (19, 21), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (15, 16), (17, 18), (19, 20), (21, 22),
];

const MERGE25: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18), (10, 18),
    (6, 22), (14, 22), (6, 10), (14, 18), (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (22, 24),
    (1, 17), (9, 17), (5, 21), (13, 21), (5, 9), (13, 17), (3, 19), (11, 19), (7, 23), (15, 23),
    (7, 11), (15, 19), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24),
];

const MERGE26: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18), (10, 18),
    (6, 22), (14, 22), (6, 10), (14, 18), (2, 4), (6, 8), (10, 12), (14, 16), (18, 20), (22, 24),
    (1, 17), (9, 25), (9, 17), (5, 21), (13, 21), (5, 9), (13, 17), (21, 25), (3, 19), (11, 19),
    (7, 23), (15, 23), (7, 11), (15, 19), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (23, 25),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
    (21, 22), (23, 24),
];

const MERGE27: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18), (10, 26),
    (10, 18), (6, 22), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8), (10, 12), (14, 16),
    (18, 20), (22, 24), (1, 17), (9, 25), (9, 17), (5, 21), (13, 21), (5, 9), (13, 17), (21, 25),
    (3, 19), (11, 19), (7, 23), (15, 23), (7, 11), (15, 19), (3, 5), (7, 9), (11, 13), (15, 17),
    (19, 21), (23, 25), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
    (17, 18), (19, 20), (21, 22), (23, 24), (25, 26),
];

const MERGE28: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18), (10, 26),
    (10, 18), (6, 22), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8), (10, 12), (14, 16),
    (18, 20), (22, 24), (1, 17), (9, 25), (9, 17), (5, 21), (13, 21), (5, 9), (13, 17), (21, 25),
    (3, 19), (11, 27), (11, 19), (7, 23), (15, 23), (7, 11), (15, 19), (23, 27), (3, 5), (7, 9),
    (11, 13), (15, 17), (19, 21), (23, 25), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24), (25, 26),
];

const MERGE29: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 28), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18),
    (10, 26), (10, 18), (6, 22), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8), (10, 12),
    (14, 16), (18, 20), (22, 24), (26, 28), (1, 17), (9, 25), (9, 17), (5, 21), (13, 21), (5, 9),
    (13, 17), (21, 25), (3, 19), (11, 27), (11, 19), (7, 23), (15, 23), (7, 11), (15, 19),
    (23, 27), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (23, 25), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24),
    (25, 26), (27, 28),
];

const MERGE30: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 28), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18),
    (10, 26), (10, 18), (6, 22), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8), (10, 12),
    (14, 16), (18, 20), (22, 24), (26, 28), (1, 17), (9, 25), (9, 17), (5, 21), (13, 29), (13, 21),
    (5, 9), (13, 17), (21, 25), (3, 19), (11, 27), (11, 19), (7, 23), (15, 23), (7, 11), (15, 19),
    (23, 27), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (23, 25), (27, 29), (1, 2), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24),
    (25, 26), (27, 28),
];

const MERGE31: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 28), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18),
    (10, 26), (10, 18), (6, 22), (14, 30), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8),
    (10, 12), (14, 16), (18, 20), (22, 24), (26, 28), (1, 17), (9, 25), (9, 17), (5, 21), (13, 29),
    (13, 21), (5, 9), (13, 17), (21, 25), (3, 19), (11, 27), (11, 19), (7, 23), (15, 23), (7, 11),
    (15, 19), (23, 27), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (23, 25), (27, 29), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22),
    (23, 24), (25, 26), (27, 28), (29, 30),
];

const MERGE32: &[(u8, u8)] = &[
    (0, 16), (8, 24), (8, 16), (4, 20), (12, 28), (12, 20), (4, 8), (12, 16), (20, 24), (2, 18),
    (10, 26), (10, 18), (6, 22), (14, 30), (14, 22), (6, 10), (14, 18), (22, 26), (2, 4), (6, 8),
    (10, 12), (14, 16), (18, 20), (22, 24), (26, 28), (1, 17), (9, 25), (9, 17), (5, 21), (13, 29),
    (13, 21), (5, 9), (13, 17), (21, 25), (3, 19), (11, 27), (11, 19), (7, 23), (15, 31), (15, 23),
    (7, 11), (15, 19), (23, 27), (3, 5), (7, 9), (11, 13), (15, 17), (19, 21), (23, 25), (27, 29),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
    (21, 22), (23, 24), (25, 26), (27, 28), (29, 30),
];
