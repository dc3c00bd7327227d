/// Common interface of every sort implementation in the workspace, so that the shared tests and
/// benchmarks can be stamped out per implementation.
///
/// Implementations never touch their input, the result is always a freshly allocated sequence.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    /// `is_less(a, b)` must return true iff `a` strictly precedes `b`.
    fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool;
}

pub mod patterns;
