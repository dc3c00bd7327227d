use rand::prelude::*;

use hana_sort::const_eval;
use hana_sort::self_check::{self, REFERENCE_CASES};
use hana_sort::stable::{quicksort_algorithm, quicksort_combinator, rust_std};

type SortFn = fn(&[i32]) -> Vec<i32>;

const STYLES: [(&str, SortFn); 2] = [
    ("algorithm", quicksort_algorithm::sort::<i32>),
    ("combinator", quicksort_combinator::sort::<i32>),
];

fn random_inputs(count: usize) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..64);
            let max = rng.gen_range(1..100);
            (0..len).map(|_| rng.gen_range(-max..max)).collect()
        })
        .collect()
}

#[test]
fn reference_cases() {
    for (name, sort) in STYLES {
        for (input, expected) in REFERENCE_CASES {
            assert_eq!(sort(input), expected, "{name}");
        }
    }
}

#[test]
fn empty_and_singleton_laws() {
    for (name, sort) in STYLES {
        assert_eq!(sort(&[]), Vec::<i32>::new(), "{name}");
        for x in [i32::MIN, -1, 0, 7, i32::MAX] {
            assert_eq!(sort(&[x]), vec![x], "{name}");
        }
    }
}

#[test]
fn permutation_ordering_and_idempotence() {
    for input in random_inputs(200) {
        let expected = rust_std::sort(&input);

        for (name, sort) in STYLES {
            let once = sort(&input);
            assert_eq!(once, expected, "{name}: {input:?}");
            assert!(once.windows(2).all(|w| !(w[1] < w[0])), "{name}");
            assert_eq!(sort(&once), once, "{name}");
        }
    }
}

#[test]
fn styles_agree_on_stable_order() {
    for input in random_inputs(100) {
        // Few distinct keys, tagged with their original position.
        let keyed: Vec<(i32, usize)> = input
            .iter()
            .enumerate()
            .map(|(i, &x)| (x.rem_euclid(4), i))
            .collect();

        let is_less = |a: &(i32, usize), b: &(i32, usize)| a.0 < b.0;
        let expected = rust_std::sort_by(&keyed, is_less);

        assert_eq!(quicksort_algorithm::sort_by(&keyed, is_less), expected);
        assert_eq!(quicksort_combinator::sort_by(&keyed, is_less), expected);
    }
}

#[test]
fn inconsistent_predicate_does_not_panic() {
    let predicates: [fn(&i32, &i32) -> bool; 3] = [|_, _| true, |_, _| false, |a, b| a <= b];

    for input in random_inputs(50) {
        let mut original = input.clone();
        original.sort_unstable();

        for is_less in predicates {
            for mut got in [
                quicksort_algorithm::sort_by(&input, is_less),
                quicksort_combinator::sort_by(&input, is_less),
            ] {
                got.sort_unstable();
                assert_eq!(got, original);
            }
        }
    }
}

#[test]
fn compile_time_sort_matches() {
    const INPUT: [i32; 8] = [4, 3, 2, 1, 8, 7, 6, 5];
    const SORTED: [i32; 8] = const_eval::sort(INPUT);

    assert!(const_eval::equal(&SORTED, &[1, 2, 3, 4, 5, 6, 7, 8]));
    for (_, sort) in STYLES {
        assert_eq!(sort(&INPUT), SORTED);
    }
}

#[test]
fn self_check_passes() {
    assert_eq!(self_check::run(), Ok(()));
}
