//! Exhaustive equivalence checking between two field implementations
//!
//! The table-driven fields must agree bit for bit with the reference field
//! over the whole value range. This module runs that comparison, rows in
//! parallel, and times each operation.

use crate::galois::{FieldElement, FieldError, GaloisField};
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Operation under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Mul,
    Div,
    Reciprocal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Mul => write!(f, "mul"),
            Operation::Div => write!(f, "div"),
            Operation::Reciprocal => write!(f, "rcp"),
        }
    }
}

/// Two-operand comparison phase; reciprocals run separately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Add,
    Mul,
    Div,
}

impl From<Phase> for Operation {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Add => Operation::Add,
            Phase::Mul => Operation::Mul,
            Phase::Div => Operation::Div,
        }
    }
}

/// Why two fields are not equivalent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestbenchError {
    #[error("field orders differ: candidate {candidate}, reference {reference}")]
    OrderMismatch { candidate: u64, reference: u64 },

    /// `b` is 0 for reciprocals
    #[error("{op}({a}, {b}) = {actual}, reference gives {expected}")]
    Mismatch {
        op: Operation,
        a: u64,
        b: u64,
        expected: u64,
        actual: u64,
    },

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Timings of a successful comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceReport {
    pub order: u64,
    /// Every `row_step`-th left operand was compared against all right operands
    pub row_step: u64,
    pub comparisons: u64,
    pub add: Duration,
    pub mul: Duration,
    pub div: Duration,
    pub reciprocal: Duration,
}

impl fmt::Display for EquivalenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "order {} ({} comparisons, row step {})",
            self.order, self.comparisons, self.row_step
        )?;
        writeln!(f, "add: {}", format_elapsed(self.add))?;
        writeln!(f, "mul: {}", format_elapsed(self.mul))?;
        writeln!(f, "div: {}", format_elapsed(self.div))?;
        write!(f, "rcp: {}", format_elapsed(self.reciprocal))
    }
}

/// Render a duration with three significant-ish digits: `154 ms`, `37 us`
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos >= 100_000_000_000 {
        format!("{} s", nanos / 1_000_000_000)
    } else if nanos >= 100_000_000 {
        format!("{} ms", nanos / 1_000_000)
    } else if nanos >= 100_000 {
        format!("{} us", nanos / 1_000)
    } else {
        format!("{} ns", nanos)
    }
}

/// Compare every operation over every pair of elements
pub fn compare_fields<A, B>(
    candidate: &A,
    reference: &B,
) -> Result<EquivalenceReport, TestbenchError>
where
    A: GaloisField,
    B: GaloisField,
{
    compare_fields_sampled(candidate, reference, 1)
}

/// Like [`compare_fields`] but only every `row_step`-th left operand
///
/// Right operands and reciprocals are always exhaustive. Use this for fields
/// where the full square is too slow, such as GF(2^16) in debug builds.
pub fn compare_fields_sampled<A, B>(
    candidate: &A,
    reference: &B,
    row_step: u64,
) -> Result<EquivalenceReport, TestbenchError>
where
    A: GaloisField,
    B: GaloisField,
{
    let order = candidate.order();
    if order != reference.order() {
        return Err(TestbenchError::OrderMismatch {
            candidate: order,
            reference: reference.order(),
        });
    }
    let row_step = row_step.max(1);
    let rows: Vec<u64> = (0..order).step_by(row_step as usize).collect();
    debug!(
        "Comparing fields of order {} over {} rows",
        order,
        rows.len()
    );

    let add = run_phase(candidate, reference, Phase::Add, &rows)?;
    let mul = run_phase(candidate, reference, Phase::Mul, &rows)?;
    let div = run_phase(candidate, reference, Phase::Div, &rows)?;
    let reciprocal = run_reciprocal(candidate, reference)?;

    let rows_len = rows.len() as u64;
    let comparisons = rows_len * order * 2 + rows_len * (order - 1) + (order - 1);
    let report = EquivalenceReport {
        order,
        row_step,
        comparisons,
        add,
        mul,
        div,
        reciprocal,
    };
    info!(
        "Fields of order {} agree on {} comparisons",
        order, comparisons
    );
    Ok(report)
}

fn run_phase<A, B>(
    candidate: &A,
    reference: &B,
    phase: Phase,
    rows: &[u64],
) -> Result<Duration, TestbenchError>
where
    A: GaloisField,
    B: GaloisField,
{
    let order = candidate.order();
    let first_column = if phase == Phase::Div { 1 } else { 0 };
    let start = Instant::now();

    rows.par_iter().try_for_each(|&a| {
        let (ca, ra) = (candidate.element(a)?, reference.element(a)?);
        for b in first_column..order {
            let (cb, rb) = (candidate.element(b)?, reference.element(b)?);
            let (actual, expected) = match phase {
                Phase::Add => ((ca + cb).to_u64(), (ra + rb).to_u64()),
                Phase::Mul => (
                    candidate.mul(ca, cb).to_u64(),
                    reference.mul(ra, rb).to_u64(),
                ),
                Phase::Div => (
                    candidate.div(ca, cb)?.to_u64(),
                    reference.div(ra, rb)?.to_u64(),
                ),
            };
            if actual != expected {
                return Err(TestbenchError::Mismatch {
                    op: phase.into(),
                    a,
                    b,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    })?;

    Ok(start.elapsed())
}

fn run_reciprocal<A, B>(candidate: &A, reference: &B) -> Result<Duration, TestbenchError>
where
    A: GaloisField,
    B: GaloisField,
{
    let start = Instant::now();
    (1..candidate.order()).into_par_iter().try_for_each(|a| {
        let actual = candidate.reciprocal(candidate.element(a)?)?.to_u64();
        let expected = reference.reciprocal(reference.element(a)?)?.to_u64();
        if actual != expected {
            return Err(TestbenchError::Mismatch {
                op: Operation::Reciprocal,
                a,
                b: 0,
                expected,
                actual,
            });
        }
        Ok(())
    })?;
    Ok(start.elapsed())
}
