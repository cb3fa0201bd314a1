use crate::error::VectorError;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

/// The left-hand side of a mixed scalar/vector expression, tagged at the
/// call site.
///
/// Where dynamically typed code sniffs the runtime type of an operand to
/// choose between scalar and elementwise arithmetic, callers here name the
/// variant and the match below resolves it. Projection and rejection are
/// only defined for the `Vector` variant; a `Scalar` left operand is a
/// domain error.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<T> {
    Scalar(T),
    Vector(Vector<T>),
}

impl<T: Scalar> Operand<T> {
    /// `self + rhs`; a scalar operand is added to every component.
    pub fn add(&self, rhs: &Vector<T>) -> Vector<T> {
        match self {
            Operand::Scalar(s) => rhs + *s,
            Operand::Vector(v) => v + rhs,
        }
    }

    /// `self - rhs`; the scalar form is `-rhs + s`.
    pub fn sub(&self, rhs: &Vector<T>) -> Vector<T> {
        match self {
            Operand::Scalar(s) => {
                let negated = -rhs;
                &negated + *s
            }
            Operand::Vector(v) => v - rhs,
        }
    }

    /// `self * rhs`; scalar multiply or Hadamard product.
    pub fn mul(&self, rhs: &Vector<T>) -> Vector<T> {
        match self {
            Operand::Scalar(s) => rhs * *s,
            Operand::Vector(v) => v * rhs,
        }
    }

    /// Projects the operand onto `direction`. A scalar has no direction to
    /// project, so the `Scalar` variant fails with `UnsupportedProjection`.
    pub fn project_onto(&self, direction: &Vector<T>) -> Result<Vector<T>, VectorError> {
        match self {
            Operand::Scalar(_) => Err(VectorError::UnsupportedProjection),
            Operand::Vector(v) => v.project_onto(direction),
        }
    }

    /// The orthogonal complement of [`project_onto`](Self::project_onto);
    /// rejects the `Scalar` variant with the same error.
    pub fn reject_from(&self, direction: &Vector<T>) -> Result<Vector<T>, VectorError> {
        match self {
            Operand::Scalar(_) => Err(VectorError::UnsupportedProjection),
            Operand::Vector(v) => v.reject_from(direction),
        }
    }
}

impl<T> From<T> for Operand<T> {
    fn from(value: T) -> Self {
        Operand::Scalar(value)
    }
}

impl<T> From<Vector<T>> for Operand<T> {
    fn from(value: Vector<T>) -> Self {
        Operand::Vector(value)
    }
}
