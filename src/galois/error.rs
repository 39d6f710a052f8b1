//! Error types for finite field operations

use thiserror::Error;

/// Errors raised by field construction and arithmetic
///
/// All of these are precondition violations on deterministic arithmetic;
/// retrying the same operation never changes the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Integer does not name an element of the field
    #[error("value {value} is out of range for a field of order {order}")]
    OutOfRange { value: u64, order: u64 },

    /// Reciprocal of, or division by, the zero element
    #[error("division by zero in Galois field")]
    DivisionByZero,

    /// Value shares a factor with a composite modulus
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: u64, modulus: u64 },

    /// Polynomial degree does not fit the table variant
    #[error("polynomial {poly:#x} has degree {degree}, supported degrees are 1..={max_degree}")]
    InvalidConfiguration {
        poly: u64,
        degree: u32,
        max_degree: u32,
    },

    /// Polynomial does not generate the full multiplicative group
    #[error("polynomial {poly:#x} is not primitive")]
    NotPrimitive { poly: u64 },
}

/// Type alias for Result with FieldError
pub type Result<T> = std::result::Result<T, FieldError>;
