//! Runs the reference cases against every runtime sort.

use thiserror::Error;

use sort_test_tools::Sort;

use crate::stable::{quicksort_algorithm, quicksort_combinator};

/// Inputs and their expected output, compared with `<`.
pub const REFERENCE_CASES: [(&[i32], &[i32]); 5] = [
    (&[], &[]),
    (&[1], &[1]),
    (&[2, 1], &[1, 2]),
    (&[3, 2, 1], &[1, 2, 3]),
    (&[4, 3, 2, 1], &[1, 2, 3, 4]),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelfCheckError {
    #[error("{style}: sorting {input:?} gave {got:?}, expected {expected:?}")]
    Mismatch {
        style: String,
        input: Vec<i32>,
        expected: Vec<i32>,
        got: Vec<i32>,
    },
}

pub fn run() -> Result<(), SelfCheckError> {
    check::<quicksort_algorithm::SortImpl>()?;
    check::<quicksort_combinator::SortImpl>()?;

    Ok(())
}

/// Checks a single implementation, element by element and in order.
pub fn check<S: Sort>() -> Result<(), SelfCheckError> {
    for (input, expected) in REFERENCE_CASES {
        let got = S::sort(input);
        if got != expected {
            return Err(SelfCheckError::Mismatch {
                style: S::name(),
                input: input.to_vec(),
                expected: expected.to_vec(),
                got,
            });
        }
    }

    Ok(())
}
