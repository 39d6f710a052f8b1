//! Reed-Solomon erasure coding over any [`GaloisField`]
//!
//! Two schemes share the same guarantee: any K of the N coded symbols,
//! together with the coordinates they were produced at, recover the K message
//! symbols exactly.
//!
//! - [`cauchy`]: codeword symbols are rows of a Cauchy matrix applied to the
//!   message; decoding evaluates the closed-form inverse entry by entry.
//! - [`lagrange`]: the message defines the unique polynomial of degree < K
//!   through its `(coordinate, value)` pairs; codeword symbols are evaluations
//!   of it and decoding re-interpolates from any K of them.
//!
//! Neither coder knows which concrete field it runs over.

pub mod cauchy;
pub mod error;
pub mod lagrange;

pub use cauchy::CauchyCoder;
pub use error::{CodeError, Result};
pub use lagrange::LagrangeCoder;

use crate::galois::{FieldElement, GaloisField};
use rustc_hash::FxHashSet;

/// A coded or message symbol tagged with the coordinate it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node<E> {
    pub coord: E,
    pub value: E,
}

impl<E> Node<E> {
    pub fn new(coord: E, value: E) -> Self {
        Self { coord, value }
    }
}

impl<E> From<(E, E)> for Node<E> {
    fn from((coord, value): (E, E)) -> Self {
        Self { coord, value }
    }
}

/// Coordinates `start..start + count` as field elements
pub fn coordinate_range<F: GaloisField>(
    field: &F,
    start: u64,
    count: usize,
) -> Result<Vec<F::Element>> {
    let end = match start.checked_add(count as u64) {
        Some(end) if end <= field.order() => end,
        end => {
            return Err(CodeError::TooManySymbols {
                requested: end.unwrap_or(u64::MAX),
                order: field.order(),
            })
        }
    };
    (start..end)
        .map(|value| field.element(value).map_err(CodeError::from))
        .collect()
}

/// Fail with [`CodeError::DuplicateCoordinate`] on the first repeated coordinate
pub fn ensure_distinct<E: FieldElement>(coords: impl IntoIterator<Item = E>) -> Result<()> {
    let mut seen = FxHashSet::default();
    for coord in coords {
        if !seen.insert(coord) {
            return Err(CodeError::DuplicateCoordinate(coord.to_u64()));
        }
    }
    Ok(())
}

/// Fail with [`CodeError::SymbolCount`] unless `actual == expected`
#[inline]
pub(crate) fn ensure_count(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(CodeError::SymbolCount { expected, actual });
    }
    Ok(())
}
