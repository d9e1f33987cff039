//! Summation over any sequence of integers
//!
//! `sum_array` is a left fold with `+` that starts from the additive identity.
//! It accepts anything iterable: arrays, slices, vectors, or iterators yielding
//! either values or references. The empty sequence sums to zero.
//!
//! Overflow is not policed. Addition uses the integer type's native `+`, so it
//! panics in debug builds and wraps in release builds.

use std::borrow::Borrow;
use std::ops::Add;
use tracing::trace;

/// Integer types that can be summed by [`sum_array`]
pub trait Additive: Copy + Add<Output = Self> {
    /// The additive identity, used as the starting accumulator
    const ZERO: Self;
}

macro_rules! impl_additive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Additive for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_additive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Sum the elements of `values` in order, starting from zero
pub fn sum_array<T, I>(values: I) -> T
where
    T: Additive,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut count = 0usize;
    let total = values.into_iter().fold(T::ZERO, |acc, value| {
        count += 1;
        acc + *value.borrow()
    });
    trace!(count, "summed sequence");
    total
}
