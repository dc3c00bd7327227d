// Both quicksort styles are stable and never touch their input.
pub mod quicksort_algorithm;
pub mod quicksort_combinator;

// Clone the input and sort it with the stdlib, as a baseline.
pub mod rust_std;
