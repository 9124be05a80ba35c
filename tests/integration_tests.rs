use rand::Rng;
use spreadsort::config::MIN_SORT_SIZE;
use spreadsort::prelude::*;

fn assert_sorted_permutation<T: Ord + Clone + std::fmt::Debug>(actual: &[T], input: &[T]) {
    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(actual, expected.as_slice());
}

#[test]
fn test_basic_sort_integers() {
    let mut data = vec![5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
    spreadsort(&mut data);
    assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
}

#[test]
fn test_basic_sort_floats() {
    let mut data = vec![1.5, -0.0, 0.0, -2.25, 3.75];
    spreadsort(&mut data);

    assert_eq!(data[0], -2.25);
    // -0.0 and 0.0 compare equal; both must sit between -2.25 and 1.5.
    assert_eq!(data[1], 0.0);
    assert_eq!(data[2], 0.0);
    assert_eq!(&data[3..], &[1.5, 3.75]);
}

#[test]
fn test_threshold_boundaries() {
    let mut rng = rand::rng();

    for len in [MIN_SORT_SIZE - 1, MIN_SORT_SIZE, MIN_SORT_SIZE + 1] {
        let input: Vec<u64> = (0..len).map(|_| rng.random()).collect();
        let mut data = input.clone();
        spreadsort(&mut data);
        assert_sorted_permutation(&data, &input);

        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let mut data = input.clone();
        spreadsort(&mut data);
        assert_sorted_permutation(&data, &input);
    }
}

#[test]
fn test_all_integer_widths() {
    let mut rng = rand::rng();
    let len = 20_000;

    macro_rules! check {
        ($($t:ty => $gen:expr),* $(,)?) => {$(
            let input: Vec<$t> = (0..len).map(|_| $gen).collect();
            let mut data = input.clone();
            spreadsort(&mut data);
            assert_sorted_permutation(&data, &input);
        )*};
    }

    check! {
        u8 => rng.random::<u8>(),
        u16 => rng.random::<u16>(),
        u32 => rng.random::<u32>(),
        u64 => rng.random::<u64>(),
        u128 => rng.random::<u128>(),
        i8 => rng.random::<i8>(),
        i16 => rng.random::<i16>(),
        i32 => rng.random::<i32>(),
        i64 => rng.random::<i64>(),
        i128 => rng.random::<i128>(),
    }

    // Pointer-sized integers have no uniform distribution of their own.
    check! {
        usize => rng.random::<u64>() as usize,
        isize => rng.random::<u64>() as isize,
    }
}

#[test]
fn test_bool_and_char() {
    let mut rng = rand::rng();

    let input: Vec<bool> = (0..5000).map(|_| rng.random()).collect();
    let mut data = input.clone();
    spreadsort(&mut data);
    assert_sorted_permutation(&data, &input);

    let input: Vec<char> = (0..5000).map(|_| rng.random()).collect();
    let mut data = input.clone();
    spreadsort(&mut data);
    assert_sorted_permutation(&data, &input);
}

#[test]
fn test_signed_extremes() {
    let mut data: Vec<i64> = (0..3000)
        .map(|i| match i % 5 {
            0 => i64::MIN,
            1 => i64::MAX,
            2 => -1,
            3 => 0,
            _ => i as i64 - 1500,
        })
        .collect();
    let input = data.clone();
    spreadsort(&mut data);
    assert_sorted_permutation(&data, &input);
    assert_eq!(data[0], i64::MIN);
    assert_eq!(data[data.len() - 1], i64::MAX);
}

#[test]
fn test_sort_by_shift_struct() {
    #[derive(Clone, Debug, PartialEq, PartialOrd)]
    struct Record {
        key: u32,
        payload: String,
    }

    let mut rng = rand::rng();
    let mut records: Vec<Record> = (0..10_000)
        .map(|i| Record {
            key: rng.random_range(0..1_000_000),
            payload: format!("record-{i}"),
        })
        .collect();

    spreadsort_by_shift(&mut records, |r: &Record, offset: u32| r.key >> offset);

    assert!(records.windows(2).all(|w| w[0].key <= w[1].key));
}

#[test]
fn test_sort_by_custom_compare_descending() {
    let mut rng = rand::rng();
    let input: Vec<u32> = (0..10_000).map(|_| rng.random()).collect();

    let mut data = input.clone();
    spreadsort_by(
        &mut data,
        |x: &u32, offset: u32| !*x >> offset,
        |a: &u32, b: &u32| a > b,
    );

    let mut expected = input;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(data, expected);
}

#[test]
fn test_sort_by_key_field() {
    #[derive(Clone, Debug)]
    struct Trade {
        price: f64,
        volume: u32,
    }

    let mut rng = rand::rng();
    let mut trades: Vec<Trade> = (0..8000)
        .map(|_| Trade {
            price: rng.random_range(-100.0..100.0),
            volume: rng.random(),
        })
        .collect();

    spreadsort_by_key(&mut trades, |t| t.price);
    assert!(trades.windows(2).all(|w| w[0].price <= w[1].price));

    spreadsort_by_key(&mut trades, |t| t.volume);
    assert!(trades.windows(2).all(|w| w[0].volume <= w[1].volume));
}

#[test]
fn test_idempotent_on_sorted_input() {
    let mut rng = rand::rng();
    let mut data: Vec<u64> = (0..50_000).map(|_| rng.random()).collect();
    spreadsort(&mut data);

    let once = data.clone();
    spreadsort(&mut data);
    assert_eq!(data, once);
}

#[test]
fn test_clustered_keys() {
    // Dense clusters separated by wide gaps: the first pass sees a huge key range, the
    // recursive passes see small ones.
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..100_000)
        .map(|_| {
            let cluster = rng.random_range(0..8u64) << 56;
            cluster | rng.random_range(0..5000u64)
        })
        .collect();

    let mut data = input.clone();
    spreadsort(&mut data);
    assert_sorted_permutation(&data, &input);
}

#[test]
fn test_fuzz_random_lengths() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..5000);
        let bits = rng.random_range(1..=64u32);
        let input: Vec<u64> = (0..len)
            .map(|_| rng.random::<u64>() >> (64 - bits))
            .collect();

        let mut data = input.clone();
        spreadsort(&mut data);
        assert_sorted_permutation(&data, &input);
    }
}

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<u32> = vec![];
    spreadsort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![42u8];
    spreadsort(&mut single);
    assert_eq!(single, vec![42]);
}
