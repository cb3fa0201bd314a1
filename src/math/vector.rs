use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::{Iter, IterMut, SliceIndex};

use log::warn;
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::math::scalar::Scalar;

/// An ordered sequence of numeric components with operator arithmetic.
///
/// Operators come in scalar and vector flavors: `v + s` adds the scalar to
/// every component, `v + w` is the elementwise sum, `v * s` scales, `v * w`
/// is the Hadamard product. Combining two vectors pairs components by
/// position and stops at the shorter operand; mismatched lengths are logged
/// rather than rejected.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked read; the panicking equivalent is `Index`.
    pub fn get(&self, index: usize) -> Result<&T, VectorError> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// Checked write; the panicking equivalent is `IndexMut`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::OutOfRange { index, len }),
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_vec(vec![T::one(); len])
    }
}

impl<T: Scalar> Vector<T> {
    /// Pairs components by position, dropping the tail of the longer vector.
    fn paired<'a>(&'a self, other: &'a Vector<T>) -> impl Iterator<Item = (T, T)> + 'a {
        if self.data.len() != other.data.len() {
            warn!(
                "pairing vectors of unequal length ({} vs {}); extra components are dropped",
                self.data.len(),
                other.data.len()
            );
        }
        self.iter().zip(other.iter()).map(|(&a, &b)| (a, b))
    }

    /// Dot product: the sum of elementwise products. Symmetric in its
    /// operands.
    pub fn dot(&self, other: &Vector<T>) -> T {
        self.paired(other)
            .map(|(a, b)| a * b)
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// The component of `self` parallel to `direction`, computed as
    /// `(self·d / d·d) * d`.
    ///
    /// Fails with `DivisionByZero` when `direction` is the zero vector.
    pub fn project_onto(&self, direction: &Vector<T>) -> Result<Vector<T>, VectorError> {
        let denom = direction.dot(direction);
        if denom.is_zero() {
            return Err(VectorError::DivisionByZero);
        }
        let factor = self.dot(direction) / denom;
        Ok(direction.mapv(|&x| factor * x))
    }

    /// The component of `self` orthogonal to `direction`:
    /// `self − project_onto(self, direction)`.
    pub fn reject_from(&self, direction: &Vector<T>) -> Result<Vector<T>, VectorError> {
        let parallel = self.project_onto(direction)?;
        Ok(self - &parallel)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.mapv(|&x| -x)
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -&self
    }
}

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        self.paired(rhs).map(|(a, b)| a + b).collect()
    }
}

impl<T: Scalar> Add<Vector<T>> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Vector<T> {
        self.mapv(|&x| x + rhs)
    }
}

impl<T: Scalar> Add<T> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Vector<T> {
        &self + rhs
    }
}

// Subtraction is derived from addition and negation: a - b = -(-a + b).
impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        let negated = -self;
        -(&negated + rhs)
    }
}

impl<T: Scalar> Sub<Vector<T>> for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Vector<T> {
        let negated = -self;
        -(&negated + rhs)
    }
}

impl<T: Scalar> Sub<T> for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    /// Elementwise (Hadamard) product.
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        self.paired(rhs).map(|(a, b)| a * b).collect()
    }
}

impl<T: Scalar> Mul<Vector<T>> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.mapv(|&x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        &self * rhs
    }
}

// Reflected forms with the scalar on the left. Coherence requires one impl
// per concrete component type; commutativity is spelled out rather than
// aliased: s + v = v + s, s * v = v * s, s - v = -v + s.
macro_rules! impl_reflected_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn add(self, rhs: Vector<$t>) -> Vector<$t> {
                    &rhs + self
                }
            }

            impl Add<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn add(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs + self
                }
            }

            impl Sub<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn sub(self, rhs: Vector<$t>) -> Vector<$t> {
                    self - &rhs
                }
            }

            impl Sub<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn sub(self, rhs: &Vector<$t>) -> Vector<$t> {
                    let negated = -rhs;
                    &negated + self
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    &rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_reflected_ops!(
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

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from_vec(value.into())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, I> Index<I> for Vector<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, I> IndexMut<I> for Vector<T>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

// The debug form round-trips: `Vector([1, 2, 3])` reconstructs an equal
// vector via `Vector::from(vec![1, 2, 3])`.
impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        fmt::Debug::fmt(&self.data, f)?;
        write!(f, ")")
    }
}
