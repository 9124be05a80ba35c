use proptest::prelude::*;
use spreadsort::prelude::*;

fn reference<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut expected = v.to_vec();
    expected.sort_unstable();
    expected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_u64_matches_std(v in prop::collection::vec(any::<u64>(), 0..3000)) {
        let mut data = v.clone();
        spreadsort(&mut data);
        prop_assert_eq!(data, reference(&v));
    }

    #[test]
    fn prop_narrow_u32_matches_std(v in prop::collection::vec(0u32..64, 0..3000)) {
        let mut data = v.clone();
        spreadsort(&mut data);
        prop_assert_eq!(data, reference(&v));
    }

    #[test]
    fn prop_i16_matches_std(v in prop::collection::vec(any::<i16>(), 0..3000)) {
        let mut data = v.clone();
        spreadsort(&mut data);
        prop_assert_eq!(data, reference(&v));
    }

    #[test]
    fn prop_f64_matches_total_cmp(v in prop::collection::vec(any::<f64>(), 0..3000)) {
        let mut data = v.clone();
        spreadsort(&mut data);

        let mut expected = v;
        expected.sort_by(|a, b| a.total_cmp(b));
        prop_assert_eq!(
            data.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            expected.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_pairs_sorted_by_first(v in prop::collection::vec((any::<u32>(), any::<u8>()), 0..3000)) {
        let mut data = v.clone();
        spreadsort_by_key(&mut data, |p| p.0);

        prop_assert!(data.windows(2).all(|w| w[0].0 <= w[1].0));
        let mut sorted_data = data;
        sorted_data.sort_unstable();
        prop_assert_eq!(sorted_data, reference(&v));
    }

    #[test]
    fn prop_networks_sort_any_small_slice(v in prop::collection::vec(any::<i32>(), 0..=32)) {
        let mut data = v.clone();
        prop_assert!(spreadsort::network::sort(&mut data).is_ok());
        prop_assert_eq!(data, reference(&v));
    }
}
