//! Small functional building blocks used by the combinator-style quicksort.

use std::iter;

/// A function that receives itself as its first argument, see [`fix`].
pub struct Fix<F>(F);

impl<F> Fix<F> {
    pub fn call<A, R>(&self, arg: A) -> R
    where
        F: Fn(&dyn Fn(A) -> R, A) -> R,
    {
        (self.0)(&|a| self.call(a), arg)
    }
}

/// Fixed-point combinator. Ties the recursive knot of `f`, whose first parameter is the function
/// being defined.
///
/// ```ignore
/// let fact = fix(|fact: &dyn Fn(u64) -> u64, n: u64| if n == 0 { 1 } else { n * fact(n - 1) });
/// assert_eq!(fact.call(5), 120);
/// ```
pub fn fix<F>(f: F) -> Fix<F> {
    Fix(f)
}

/// Binds the second argument of `pred`.
pub fn partial<'a, T, P>(pred: &'a P, x: &'a T) -> impl Fn(&T) -> bool + 'a
where
    P: Fn(&T, &T) -> bool,
{
    move |e| pred(e, x)
}

pub fn head_tail<T>(xs: Vec<T>) -> Option<(T, Vec<T>)> {
    let mut iter = xs.into_iter();
    let head = iter.next()?;

    Some((head, iter.collect()))
}

pub fn prepend<T>(x: T, xs: Vec<T>) -> Vec<T> {
    iter::once(x).chain(xs).collect()
}

pub fn concat<T>(mut a: Vec<T>, b: Vec<T>) -> Vec<T> {
    a.extend(b);
    a
}
