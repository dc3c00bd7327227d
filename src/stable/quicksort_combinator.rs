//! Quicksort in the functional combinator style.
//!
//! Recursion goes through [`fix`], the comparison against the pivot through [`partial`], and the
//! result is assembled from fresh sequences with [`concat`] and [`prepend`].

use crate::combinators::{concat, fix, head_tail, partial, prepend};

sort_impl!("quicksort_combinator_stable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    stable_sort(v, |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    stable_sort(v, is_less)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &[T], is_less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let quicksort = fix(|sort: &dyn Fn(Vec<T>) -> Vec<T>, xs: Vec<T>| -> Vec<T> {
        if xs.len() < 2 {
            return xs;
        }

        match head_tail(xs) {
            None => Vec::new(),
            Some((pivot, rest)) => {
                let (lt, ge): (Vec<T>, Vec<T>) =
                    rest.into_iter().partition(partial(&is_less, &pivot));

                concat(sort(lt), prepend(pivot, sort(ge)))
            }
        }
    });

    quicksort.call(v.to_vec())
}
