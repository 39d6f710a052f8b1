//! Error types for erasure coding operations

use crate::galois::FieldError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Field arithmetic failed
    #[error("field arithmetic failed: {0}")]
    Field(#[from] FieldError),

    /// Wrong number of message or received symbols
    #[error("expected {expected} symbols, got {actual}")]
    SymbolCount { expected: usize, actual: usize },

    /// Coordinate used twice within one coordinate set
    #[error("coordinate {0} appears more than once")]
    DuplicateCoordinate(u64),

    /// Cauchy entry `1 / (row + col)` is undefined
    #[error("row coordinate {row} and column coordinate {col} sum to zero")]
    ZeroDenominator { row: u64, col: u64 },

    /// Row, column or symbol index past the end of its coordinate set
    #[error("index {index} is out of range for {count} symbols")]
    IndexOutOfRange { index: usize, count: usize },

    /// More distinct coordinates requested than the field has elements
    #[error("{requested} coordinates requested but the field has only {order} elements")]
    TooManySymbols { requested: u64, order: u64 },

    /// A message needs at least one symbol
    #[error("message must contain at least one symbol")]
    EmptyMessage,
}

/// Type alias for Result with CodeError
pub type Result<T> = std::result::Result<T, CodeError>;
