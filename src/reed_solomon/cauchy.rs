//! Cauchy matrix Reed-Solomon coder
//!
//! ## Encoding
//!
//! With message coordinates `y_0..y_K` (the matrix columns) and codeword
//! coordinates `x_0..x_N` (the rows), codeword symbol `i` is
//!
//! ```text
//! c_i = Σ_j m_j / (x_i + y_j)
//! ```
//!
//! The matrix is never materialised; entries are computed on demand.
//!
//! ## Decoding
//!
//! Any K rows of a Cauchy matrix form an invertible square Cauchy matrix whose
//! inverse has a closed form. For received rows `x_0..x_K` the entry mapping
//! received symbol `j` to message symbol `i` is
//!
//! ```text
//!            Π_k (x_j + y_k)(x_k + y_i)
//! ─────────────────────────────────────────────────
//! (x_j + y_i) · Π_{k≠j} (x_j - x_k) · Π_{k≠i} (y_i - y_k)
//! ```
//!
//! Each entry costs O(K), so recovering the message costs O(K³) in total with
//! no pivoting and no singular cases to handle.

use super::{coordinate_range, ensure_count, ensure_distinct, CodeError, Node, Result};
use crate::galois::{FieldElement, GaloisField};
use log::{debug, trace};
use rayon::prelude::*;

/// Cauchy Reed-Solomon encoder/decoder borrowing its field
#[derive(Debug, Clone)]
pub struct CauchyCoder<'f, F: GaloisField> {
    field: &'f F,
    message_coords: Vec<F::Element>,
    code_coords: Vec<F::Element>,
}

impl<'f, F: GaloisField> CauchyCoder<'f, F> {
    /// Create a coder for K = `message_coords.len()` message symbols and
    /// N = `code_coords.len()` codeword symbols
    ///
    /// Coordinates must be distinct within each set and no `row + col` may be
    /// zero. Over a binary field that means the two sets are disjoint; over a
    /// prime field it also rules out `row == -col`.
    pub fn new(
        field: &'f F,
        message_coords: Vec<F::Element>,
        code_coords: Vec<F::Element>,
    ) -> Result<Self> {
        if message_coords.is_empty() {
            return Err(CodeError::EmptyMessage);
        }
        ensure_distinct(message_coords.iter().copied())?;
        ensure_distinct(code_coords.iter().copied())?;
        for &row in &code_coords {
            ensure_nonzero_denominators(row, &message_coords)?;
        }

        debug!(
            "Cauchy coder over field of order {}: K={} message symbols, N={} code symbols",
            field.order(),
            message_coords.len(),
            code_coords.len()
        );

        Ok(Self {
            field,
            message_coords,
            code_coords,
        })
    }

    /// Message coordinates `0..K`, codeword coordinates `K..K+N`
    pub fn with_default_coords(field: &'f F, k: usize, n: usize) -> Result<Self> {
        let total = (k as u64).saturating_add(n as u64);
        if total > field.order() {
            return Err(CodeError::TooManySymbols {
                requested: total,
                order: field.order(),
            });
        }
        let message_coords = coordinate_range(field, 0, k)?;
        let code_coords = coordinate_range(field, k as u64, n)?;
        Self::new(field, message_coords, code_coords)
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// K
    pub fn data_symbols(&self) -> usize {
        self.message_coords.len()
    }

    /// N
    pub fn code_symbols(&self) -> usize {
        self.code_coords.len()
    }

    pub fn message_coords(&self) -> &[F::Element] {
        &self.message_coords
    }

    pub fn code_coords(&self) -> &[F::Element] {
        &self.code_coords
    }

    /// Cauchy matrix entry `1 / (code_coords[row] + message_coords[col])`
    pub fn matrix_entry(&self, row: usize, col: usize) -> Result<F::Element> {
        let row = coord_at(&self.code_coords, row)?;
        let col = coord_at(&self.message_coords, col)?;
        Ok(self.field.reciprocal(row + col)?)
    }

    /// Codeword symbol `row` alone
    pub fn encode_symbol(&self, message: &[F::Element], row: usize) -> Result<F::Element> {
        ensure_count(self.data_symbols(), message.len())?;
        self.encode_at(message, coord_at(&self.code_coords, row)?)
    }

    /// All N codeword symbols, in `code_coords` order
    pub fn encode(&self, message: &[F::Element]) -> Result<Vec<F::Element>> {
        ensure_count(self.data_symbols(), message.len())?;
        self.code_coords
            .par_iter()
            .map(|&row| self.encode_at(message, row))
            .collect()
    }

    /// Codeword symbols tagged with their coordinates, ready to hand to [`Self::decode`]
    pub fn codeword(&self, message: &[F::Element]) -> Result<Vec<Node<F::Element>>> {
        let symbols = self.encode(message)?;
        Ok(self
            .code_coords
            .iter()
            .zip(symbols)
            .map(|(&coord, value)| Node::new(coord, value))
            .collect())
    }

    /// Entry of the inverse of the K×K Cauchy matrix with rows `rows`,
    /// mapping received symbol `j` to message symbol `i`
    pub fn inverse_entry(&self, rows: &[F::Element], i: usize, j: usize) -> Result<F::Element> {
        let field = self.field;
        let cols = &self.message_coords;
        ensure_count(cols.len(), rows.len())?;

        let col_i = coord_at(cols, i)?;
        let row_j = coord_at(rows, j)?;
        let mut prod_xy = F::Element::ONE;
        let mut prod_x = F::Element::ONE;
        let mut prod_y = F::Element::ONE;
        for k in 0..cols.len() {
            prod_xy = field.mul(prod_xy, field.mul(row_j + cols[k], rows[k] + col_i));
            if k != j {
                prod_x = field.mul(prod_x, row_j - rows[k]);
            }
            if k != i {
                prod_y = field.mul(prod_y, col_i - cols[k]);
            }
        }

        let denominator = field.mul(field.mul(row_j + col_i, prod_x), prod_y);
        Ok(field.div(prod_xy, denominator)?)
    }

    /// Recover the message from exactly K received `(coordinate, value)` pairs
    ///
    /// Received coordinates need not come from `code_coords`; any row that
    /// keeps the Cauchy matrix defined works.
    pub fn decode(&self, received: &[Node<F::Element>]) -> Result<Vec<F::Element>> {
        ensure_count(self.data_symbols(), received.len())?;
        ensure_distinct(received.iter().map(|node| node.coord))?;
        for node in received {
            ensure_nonzero_denominators(node.coord, &self.message_coords)?;
        }

        let rows: Vec<F::Element> = received.iter().map(|node| node.coord).collect();
        trace!(
            "Cauchy decode from rows {:?}",
            rows.iter().map(|r| r.to_u64()).collect::<Vec<_>>()
        );

        (0..self.data_symbols())
            .into_par_iter()
            .map(|i| {
                received
                    .iter()
                    .enumerate()
                    .try_fold(F::Element::ZERO, |acc, (j, node)| {
                        let entry = self.inverse_entry(&rows, i, j)?;
                        Ok::<_, CodeError>(acc + self.field.mul(node.value, entry))
                    })
            })
            .collect()
    }

    fn encode_at(&self, message: &[F::Element], row: F::Element) -> Result<F::Element> {
        self.message_coords
            .iter()
            .zip(message)
            .try_fold(F::Element::ZERO, |acc, (&col, &symbol)| {
                let entry = self.field.reciprocal(row + col)?;
                Ok::<_, CodeError>(acc + self.field.mul(symbol, entry))
            })
    }
}

fn coord_at<E: Copy>(coords: &[E], index: usize) -> Result<E> {
    coords
        .get(index)
        .copied()
        .ok_or(CodeError::IndexOutOfRange {
            index,
            count: coords.len(),
        })
}

fn ensure_nonzero_denominators<E: FieldElement>(row: E, cols: &[E]) -> Result<()> {
    match cols.iter().find(|&&col| (row + col).is_zero()) {
        Some(col) => Err(CodeError::ZeroDenominator {
            row: row.to_u64(),
            col: col.to_u64(),
        }),
        None => Ok(()),
    }
}
