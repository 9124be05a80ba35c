use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spreadsort::prelude::*;
use std::cell::Cell;

const N: usize = 100_000;

/// Sorts with a counting comparator and returns the number of comparisons made.
fn count_comparisons(data: &mut [u32]) -> usize {
    let count = Cell::new(0usize);
    spreadsort_by(
        data,
        |x: &u32, offset: u32| *x >> offset,
        |a: &u32, b: &u32| {
            count.set(count.get() + 1);
            a < b
        },
    );
    count.get()
}

#[test]
fn test_identical_elements() {
    let mut data = vec![7u32; N];
    let comparisons = count_comparisons(&mut data);

    assert!(data.iter().all(|&x| x == 7));
    assert!(comparisons < 2 * N, "{comparisons} comparisons for {N} identical keys");
}

#[test]
fn test_ascending_input() {
    let mut data: Vec<u32> = (0..N as u32).collect();
    let comparisons = count_comparisons(&mut data);

    assert!(data.windows(2).all(|w| w[0] < w[1]));
    assert!(comparisons < 2 * N, "{comparisons} comparisons for sorted input");
}

#[test]
fn test_descending_input() {
    let mut data: Vec<u32> = (0..N as u32).rev().collect();
    let comparisons = count_comparisons(&mut data);

    assert_eq!(data, (0..N as u32).collect::<Vec<_>>());
    assert!(comparisons < 30 * N, "{comparisons} comparisons for reversed input");
}

#[test]
fn test_organ_pipe_and_sawtooth() {
    let organ_pipe: Vec<u32> = (0..N as u32 / 2).chain((0..N as u32 / 2).rev()).collect();
    let sawtooth: Vec<u32> = (0..N as u32).map(|i| i % 1000).collect();

    for input in [organ_pipe, sawtooth] {
        let mut data = input.clone();
        let comparisons = count_comparisons(&mut data);

        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(data, expected);
        assert!(comparisons < 30 * N, "{comparisons} comparisons");
    }
}

#[test]
fn test_few_distinct_keys() {
    let mut rng = StdRng::seed_from_u64(42);

    for distinct in [2u64, 3, 17, 255] {
        let input: Vec<u64> = (0..N)
            .map(|_| rng.random_range(0..distinct) * 0x0101_0101_0101)
            .collect();

        let mut data = input.clone();
        spreadsort(&mut data);

        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(data, expected, "failed with {distinct} distinct keys");
    }
}

#[test]
fn test_two_extreme_values() {
    // Only the top and bottom of the key space: one pass must separate them.
    let mut rng = StdRng::seed_from_u64(43);
    let input: Vec<i64> = (0..N)
        .map(|_| if rng.random() { i64::MIN } else { i64::MAX })
        .collect();

    let mut data = input.clone();
    spreadsort(&mut data);

    let lows = input.iter().filter(|&&x| x == i64::MIN).count();
    assert!(data[..lows].iter().all(|&x| x == i64::MIN));
    assert!(data[lows..].iter().all(|&x| x == i64::MAX));
}

#[test]
fn test_single_unsorted_pair_at_end() {
    let mut data: Vec<u32> = (0..N as u32).collect();
    data.swap(N - 2, N - 1);

    spreadsort(&mut data);
    assert_eq!(data, (0..N as u32).collect::<Vec<_>>());
}
