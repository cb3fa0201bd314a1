//! numvec: a fixed-size numeric vector type with operator-based arithmetic.
//!
//! This crate provides a single value type, [`Vector`], wrapping an ordered
//! sequence of numeric components (integers, floats, or complex numbers) and
//! exposing arithmetic through the standard operator traits: addition and
//! subtraction with scalar or vector operands, scalar and elementwise
//! (Hadamard) multiplication, plus named methods for the dot product, vector
//! projection, and its orthogonal complement (rejection).
//!
//! Mixed scalar/vector expressions where the scalar sits on the left are
//! covered two ways: reflected operator impls for the built-in component
//! types, and the [`Operand`] tagged union for call sites that resolve the
//! operand kind at runtime.
pub mod error;
pub mod math;

pub use error::VectorError;
pub use math::{Operand, Scalar, Vector};
