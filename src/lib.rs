macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sort(v)
            }

            #[inline]
            fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
            where
                T: Clone,
                F: Fn(&T, &T) -> bool,
            {
                sort_by(v, is_less)
            }
        }
    };
}

pub mod combinators;
pub mod const_eval;
pub mod self_check;
pub mod stable;
