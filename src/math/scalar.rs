use std::ops::Neg;

use num_complex::Complex;
use num_traits::Num;

/// Marker trait for types usable as vector components.
///
/// Covers the signed integers, floats, and `Complex` over floats. Keeping
/// the set closed lets `Vector<T> + T` and `Vector<T> + Vector<T>` coexist
/// as operator impls without ambiguity.
pub trait Scalar: Num + Neg<Output = Self> + Copy {}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    Complex<f32>,
    Complex<f64>,
);
