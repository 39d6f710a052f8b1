//! Lagrange interpolation Reed-Solomon coder
//!
//! A K-symbol message is K `(coordinate, value)` nodes, which determine a
//! unique polynomial of degree < K. Encoding evaluates that polynomial at N
//! target coordinates; decoding interpolates through any K of the resulting
//! nodes and evaluates back at the message coordinates.
//!
//! The polynomial is never expanded into coefficients. Each evaluation uses the
//! Lagrange form directly:
//!
//! ```text
//! p(t) = Σ_j y_j · Π_{m≠j} (t - x_m) / (x_j - x_m)
//! ```
//!
//! which is O(K²) per point.
//!
//! Targets may be fixed in advance (`0..N`, see [`LagrangeCoder::encode_fixed`])
//! or be any other coordinates, including a permutation or subset of the
//! message coordinates themselves; only the coordinates handed in differ.

use super::{coordinate_range, ensure_count, ensure_distinct, CodeError, Node, Result};
use crate::galois::{self, FieldElement, GaloisField};
use log::{debug, trace};
use rayon::prelude::*;

/// Value at `point` of the polynomial of degree < `nodes.len()` through `nodes`
///
/// Node coordinates must be distinct; a repeated coordinate surfaces as
/// [`galois::FieldError::DivisionByZero`].
pub fn interpolate<F: GaloisField>(
    field: &F,
    nodes: &[Node<F::Element>],
    point: F::Element,
) -> galois::Result<F::Element> {
    let mut sum = F::Element::ZERO;
    for (j, node) in nodes.iter().enumerate() {
        let mut numerator = node.value;
        let mut denominator = F::Element::ONE;
        for (m, other) in nodes.iter().enumerate() {
            if m != j {
                numerator = field.mul(numerator, point - other.coord);
                denominator = field.mul(denominator, node.coord - other.coord);
            }
        }
        sum += field.div(numerator, denominator)?;
    }
    Ok(sum)
}

/// Evaluate the polynomial through `message` at every target coordinate
pub fn encode<F: GaloisField>(
    field: &F,
    message: &[Node<F::Element>],
    targets: &[F::Element],
) -> Result<Vec<Node<F::Element>>> {
    if message.is_empty() {
        return Err(CodeError::EmptyMessage);
    }
    ensure_distinct(message.iter().map(|node| node.coord))?;

    targets
        .par_iter()
        .map(|&coord| {
            let value = interpolate(field, message, coord)?;
            Ok::<_, CodeError>(Node::new(coord, value))
        })
        .collect()
}

/// Interpolate through K `received` nodes and evaluate at the K message
/// coordinates `targets`
pub fn decode<F: GaloisField>(
    field: &F,
    received: &[Node<F::Element>],
    targets: &[F::Element],
) -> Result<Vec<F::Element>> {
    if received.is_empty() {
        return Err(CodeError::EmptyMessage);
    }
    ensure_count(received.len(), targets.len())?;
    ensure_distinct(received.iter().map(|node| node.coord))?;
    trace!(
        "Lagrange decode from coordinates {:?}",
        received
            .iter()
            .map(|node| node.coord.to_u64())
            .collect::<Vec<_>>()
    );

    targets
        .par_iter()
        .map(|&coord| interpolate(field, received, coord).map_err(CodeError::from))
        .collect()
}

/// Lagrange Reed-Solomon encoder/decoder with fixed message coordinates
#[derive(Debug, Clone)]
pub struct LagrangeCoder<'f, F: GaloisField> {
    field: &'f F,
    message_coords: Vec<F::Element>,
}

impl<'f, F: GaloisField> LagrangeCoder<'f, F> {
    /// Create a coder whose message symbols sit at `message_coords`
    pub fn new(field: &'f F, message_coords: Vec<F::Element>) -> Result<Self> {
        if message_coords.is_empty() {
            return Err(CodeError::EmptyMessage);
        }
        ensure_distinct(message_coords.iter().copied())?;

        debug!(
            "Lagrange coder over field of order {}: K={} message symbols",
            field.order(),
            message_coords.len()
        );

        Ok(Self {
            field,
            message_coords,
        })
    }

    /// Message coordinates `0..k`
    pub fn systematic(field: &'f F, k: usize) -> Result<Self> {
        let coords = coordinate_range(field, 0, k)?;
        Self::new(field, coords)
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// K
    pub fn data_symbols(&self) -> usize {
        self.message_coords.len()
    }

    pub fn message_coords(&self) -> &[F::Element] {
        &self.message_coords
    }

    /// Pair message values with the message coordinates
    pub fn message_nodes(&self, values: &[F::Element]) -> Result<Vec<Node<F::Element>>> {
        ensure_count(self.data_symbols(), values.len())?;
        Ok(self
            .message_coords
            .iter()
            .zip(values)
            .map(|(&coord, &value)| Node::new(coord, value))
            .collect())
    }

    /// Codeword at arbitrary target coordinates
    pub fn encode(
        &self,
        values: &[F::Element],
        targets: &[F::Element],
    ) -> Result<Vec<Node<F::Element>>> {
        ensure_distinct(targets.iter().copied())?;
        let nodes = self.message_nodes(values)?;
        encode(self.field, &nodes, targets)
    }

    /// Codeword at the fixed coordinates `0..n`
    ///
    /// With the default message coordinates `0..K` the first K codeword
    /// symbols are the message itself.
    pub fn encode_fixed(&self, values: &[F::Element], n: usize) -> Result<Vec<Node<F::Element>>> {
        let targets = coordinate_range(self.field, 0, n)?;
        self.encode(values, &targets)
    }

    /// Recover the message from exactly K received nodes
    pub fn decode(&self, received: &[Node<F::Element>]) -> Result<Vec<F::Element>> {
        ensure_count(self.data_symbols(), received.len())?;
        decode(self.field, received, &self.message_coords)
    }
}
