//! Lookup table generation for the table-driven binary fields
//!
//! ## Algorithm
//!
//! Starting from `a = 1`, repeatedly multiply by the generator `x` (one left
//! shift, XOR-ing in the polynomial when the top bit would overflow) and record
//! `log[a] = i`, `exp[i] = a` for `i` in `0..order-1`. `log[0]` holds the
//! sentinel `order - 1` and `exp[order - 1]` holds `0`; neither is a valid
//! logarithm.
//!
//! The walk doubles as a primitivity check: a primitive polynomial visits
//! every nonzero element exactly once before the cycle closes on `1`.

use super::{degree, FieldError, Result, Word};
use log::{debug, trace};

/// Discrete log/exp tables for GF(2^d)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTables<W: Word> {
    poly: u64,
    degree: u32,
    log: Vec<W>,
    exp: Vec<W>,
}

impl<W: Word> LogTables<W> {
    /// Build tables for `poly`, rejecting degrees above `W::BITS` and
    /// polynomials that are not primitive
    pub fn generate(poly: u64) -> Result<Self> {
        let d = checked_degree(poly, W::BITS)?;
        let order = 1usize << d;
        let limit = order - 1;

        let mut log = vec![W::ZERO; order];
        let mut exp = vec![W::ZERO; order];

        let mut a = 1u64;
        for i in 0..limit {
            if a == 0 || (i > 0 && a == 1) {
                debug!(
                    "Polynomial {:#x} generator cycle broke at step {} of {}",
                    poly, i, limit
                );
                return Err(FieldError::NotPrimitive { poly });
            }
            log[a as usize] = W::truncate(i as u64);
            exp[i] = W::truncate(a);
            a = times_x(a, poly, d);
        }
        if a != 1 {
            return Err(FieldError::NotPrimitive { poly });
        }

        log[0] = W::truncate(limit as u64);
        exp[limit] = W::ZERO;

        debug!(
            "Generated GF(2^{}) log/exp tables for polynomial {:#x} ({} entries)",
            d, poly, order
        );

        Ok(Self {
            poly,
            degree: d,
            log,
            exp,
        })
    }

    pub fn polynomial(&self) -> u64 {
        self.poly
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn order(&self) -> usize {
        self.log.len()
    }

    /// `order - 1`, the size of the multiplicative group
    #[inline]
    pub fn limit(&self) -> usize {
        self.log.len() - 1
    }

    /// Discrete logarithm of `value`; `log(0)` is the sentinel `limit()`
    ///
    /// Bits above the field degree are masked off.
    #[inline]
    pub fn log(&self, value: usize) -> usize {
        self.log[value & self.limit()].widen() as usize
    }

    /// `x^exponent` for `exponent < limit()`, `exp(limit())` is the sentinel `0`
    ///
    /// Larger exponents wrap modulo `order()`.
    #[inline]
    pub fn exp(&self, exponent: usize) -> W {
        self.exp[exponent % self.exp.len()]
    }

    pub fn log_table(&self) -> &[W] {
        &self.log
    }

    pub fn exp_table(&self) -> &[W] {
        &self.exp
    }

    /// Bytes held by the tables
    pub fn memory_usage(&self) -> usize {
        (self.log.len() + self.exp.len()) * std::mem::size_of::<W>()
    }
}

/// Full multiplication and inverse tables for small fields (order ≤ 256)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTables {
    order: usize,
    mul: Vec<u8>,
    inv: Vec<u8>,
}

impl ProductTables {
    /// Expand log/exp tables into an `order × order` product table and an
    /// inverse table
    pub fn from_log_tables(tables: &LogTables<u8>) -> Self {
        let order = tables.order();
        let limit = tables.limit();

        let mut mul = vec![0u8; order * order];
        for a in 1..order {
            let log_a = tables.log(a);
            let row = &mut mul[a * order..(a + 1) * order];
            for (b, product) in row.iter_mut().enumerate().skip(1) {
                *product = tables.exp((log_a + tables.log(b)) % limit);
            }
        }

        let mut inv = vec![0u8; order];
        if order > 1 {
            inv[1] = 1;
        }
        for (a, inverse) in inv.iter_mut().enumerate().skip(2) {
            *inverse = tables.exp(limit - tables.log(a));
        }

        trace!("Expanded {}x{} product table", order, order);

        Self { order, mul, inv }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Operand bits above the field degree are masked off
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        self.mul[self.index(a) * self.order + self.index(b)]
    }

    /// Inverse of `a`; `inv(0)` is `0` and must be rejected by the caller
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        self.inv[self.index(a)]
    }

    /// Row `a` of the product table: `row(a)[b] == a * b`
    pub fn row(&self, a: u8) -> &[u8] {
        let start = self.index(a) * self.order;
        &self.mul[start..start + self.order]
    }

    #[inline]
    fn index(&self, a: u8) -> usize {
        a as usize & (self.order - 1)
    }

    pub fn memory_usage(&self) -> usize {
        self.mul.len() + self.inv.len()
    }
}

/// Check that `poly` is primitive by walking the generator cycle
///
/// Walks `2^d - 1` steps, so only degrees up to 24 are accepted; larger
/// degrees return `InvalidConfiguration`.
pub fn is_primitive(poly: u64) -> Result<bool> {
    let d = checked_degree(poly, 24)?;
    let limit = (1u64 << d) - 1;
    let mut a = 1u64;
    for i in 0..limit {
        if a == 0 || (i > 0 && a == 1) {
            return Ok(false);
        }
        a = times_x(a, poly, d);
    }
    Ok(a == 1)
}

/// Multiply `a` by the generator `x` modulo `poly` of degree `d`
#[inline]
fn times_x(a: u64, poly: u64, d: u32) -> u64 {
    if a >> (d - 1) == 1 {
        (a << 1) ^ poly
    } else {
        a << 1
    }
}

fn checked_degree(poly: u64, max_degree: u32) -> Result<u32> {
    match degree(poly) {
        Some(d) if (1..=max_degree).contains(&d) => Ok(d),
        d => Err(FieldError::InvalidConfiguration {
            poly,
            degree: d.unwrap_or(0),
            max_degree,
        }),
    }
}
