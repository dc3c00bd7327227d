//! Quicksort in the iterator/algorithm style.
//!
//! The sequence is walked as an iterator range: the first element is the pivot, the remaining range
//! is partitioned into two sinks, and the result is assembled by pushing the pivot to the back of
//! the sorted lower part and inserting the sorted upper part after it.

sort_impl!("quicksort_algorithm_stable");

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
    // The only clone of the input. From here on elements are moved.
    quicksort(v.to_vec(), &is_less)
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F>(v: Vec<T>, is_less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 {
        return v;
    }

    let mut range = v.into_iter();
    let Some(pivot) = range.next() else {
        return Vec::new();
    };

    let (lt, ge) = partition(range, &pivot, is_less);

    let mut sorted = quicksort(lt, is_less);
    sorted.push(pivot);
    sorted.extend(quicksort(ge, is_less));

    sorted
}

/// Stable partition of `range` into the elements that are less than `pivot` and the rest. Both
/// sides keep the relative order they had in `range`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(range: impl Iterator<Item = T>, pivot: &T, is_less: &F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T, &T) -> bool,
{
    let mut lt = Vec::new();
    let mut ge = Vec::new();

    for elem in range {
        let sink = if is_less(&elem, pivot) {
            &mut lt
        } else {
            &mut ge
        };
        sink.push(elem);
    }

    (lt, ge)
}
