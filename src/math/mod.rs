//! The numeric vector type and its operand-dispatch helpers.
//!
//! Provides [`Vector`], a fixed-length numeric tuple with operator
//! arithmetic, the [`Scalar`] marker trait bounding its component types, and
//! [`Operand`] for call sites that tag an operand as scalar or vector
//! explicitly instead of dispatching on its runtime type.
pub mod operand;
pub mod scalar;
pub mod vector;

pub use operand::Operand;
pub use scalar::Scalar;
pub use vector::Vector;
