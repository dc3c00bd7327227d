use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut sorted = v.to_vec();
        sorted.sort();
        sorted
    }

    fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        let mut sorted = v.to_vec();
        sorted.sort_by(|a, b| {
            if is_less(a, b) {
                std::cmp::Ordering::Less
            } else if is_less(b, a) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        sorted
    }
}

instantiate_sort_tests!(SortImpl);
