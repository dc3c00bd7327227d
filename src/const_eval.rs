//! The same quicksort evaluated at compile time, for `i32` arrays ordered by `<`.
//!
//! `const fn` can't call closures, so the predicate is fixed. The reference cases below are
//! `const` assertions, a regression in them fails the build.

/// Stable quicksort with the first element as pivot, usable in `const` context.
pub const fn sort<const N: usize>(v: [i32; N]) -> [i32; N] {
    quicksort(v, 0, N)
}

/// Element-wise equality, usable in `const` context.
pub const fn equal<const N: usize>(a: &[i32; N], b: &[i32; N]) -> bool {
    let mut i = 0;
    while i < N {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

// Sorts `v[lo..hi]`, leaving the rest of `v` as is.
const fn quicksort<const N: usize>(v: [i32; N], lo: usize, hi: usize) -> [i32; N] {
    if hi - lo < 2 {
        return v;
    }

    let pivot = v[lo];

    // Stable partition of v[lo + 1..hi] into out[lo..mid] and out[mid + 1..hi], pivot at mid.
    let mut out = v;
    let mut dst = lo;
    let mut src = lo + 1;
    while src < hi {
        if v[src] < pivot {
            out[dst] = v[src];
            dst += 1;
        }
        src += 1;
    }

    let mid = dst;
    out[mid] = pivot;
    dst += 1;

    src = lo + 1;
    while src < hi {
        if !(v[src] < pivot) {
            out[dst] = v[src];
            dst += 1;
        }
        src += 1;
    }

    let out = quicksort(out, lo, mid);
    quicksort(out, mid + 1, hi)
}

const _: () = assert!(equal(&sort([]), &[]));
const _: () = assert!(equal(&sort([1]), &[1]));
const _: () = assert!(equal(&sort([2, 1]), &[1, 2]));
const _: () = assert!(equal(&sort([3, 2, 1]), &[1, 2, 3]));
const _: () = assert!(equal(&sort([4, 3, 2, 1]), &[1, 2, 3, 4]));
