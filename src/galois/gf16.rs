//! GF(2^d) with log/exp tables only (d ≤ 16)
//!
//! Memory is O(order) instead of O(order²): 256 KiB for GF(2^16) against
//! 8 GiB for a full product table. Multiplication costs two log lookups, an
//! addition modulo `order - 1` and one exp lookup.

use super::tables::LogTables;
use super::{FieldElement, FieldError, GaloisField, Result};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element of a [`Gf16Field`]
///
/// Elements do not record which field produced them. Handing one to a field of
/// smaller order makes `reciprocal` and `div` fail with `OutOfRange`, while
/// `mul` keeps only the low `degree` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Gf16 {
    value: u16,
}

impl Gf16 {
    pub fn value(&self) -> u16 {
        self.value
    }
}

impl FieldElement for Gf16 {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };

    #[inline]
    fn to_u64(self) -> u64 {
        self.value as u64
    }
}

impl Add for Gf16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value ^ rhs.value,
        }
    }
}

impl AddAssign for Gf16 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Sub for Gf16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl SubAssign for Gf16 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl From<Gf16> for u16 {
    fn from(val: Gf16) -> Self {
        val.value
    }
}

impl fmt::Display for Gf16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// GF(2^d), d ≤ 16, owning its log/exp tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf16Field {
    tables: LogTables<u16>,
}

impl Gf16Field {
    pub const MAX_DEGREE: u32 = 16;

    /// Generate tables for `poly`, a primitive polynomial of degree 1..=16
    pub fn generate(poly: u64) -> Result<Self> {
        Ok(Self {
            tables: LogTables::generate(poly)?,
        })
    }

    /// Release the tables
    pub fn destroy(self) {}

    pub fn polynomial(&self) -> u64 {
        self.tables.polynomial()
    }

    pub fn tables(&self) -> &LogTables<u16> {
        &self.tables
    }

    pub fn memory_usage(&self) -> usize {
        self.tables.memory_usage()
    }

    /// Discrete logarithm of a nonzero element
    pub fn log(&self, a: Gf16) -> Result<u16> {
        self.check(a)?;
        if a.value == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.tables.log(a.value as usize) as u16)
    }

    /// Reject elements produced by a field of larger order
    #[inline]
    fn check(&self, a: Gf16) -> Result<()> {
        if a.value as usize >= self.tables.order() {
            return Err(FieldError::OutOfRange {
                value: a.value as u64,
                order: self.tables.order() as u64,
            });
        }
        Ok(())
    }

    /// Low `degree` bits of `a`
    #[inline]
    fn reduce(&self, a: Gf16) -> usize {
        a.value as usize & self.tables.limit()
    }

    /// `x^exponent`, reduced modulo `order - 1`
    pub fn exp(&self, exponent: u64) -> Gf16 {
        let limit = self.tables.limit() as u64;
        Gf16 {
            value: self.tables.exp((exponent % limit) as usize),
        }
    }
}

impl GaloisField for Gf16Field {
    type Element = Gf16;

    #[inline]
    fn order(&self) -> u64 {
        self.tables.order() as u64
    }

    fn element(&self, value: u64) -> Result<Gf16> {
        if value >= self.order() {
            return Err(FieldError::OutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(Gf16 {
            value: value as u16,
        })
    }

    /// Elements of a larger field are reduced to the low `degree` bits
    #[inline]
    fn mul(&self, a: Gf16, b: Gf16) -> Gf16 {
        let (a, b) = (self.reduce(a), self.reduce(b));
        if a == 0 || b == 0 {
            return Gf16::ZERO;
        }
        let limit = self.tables.limit();
        let log_sum = (self.tables.log(a) + self.tables.log(b)) % limit;
        Gf16 {
            value: self.tables.exp(log_sum),
        }
    }

    #[inline]
    fn reciprocal(&self, a: Gf16) -> Result<Gf16> {
        self.check(a)?;
        match a.value {
            0 => Err(FieldError::DivisionByZero),
            1 => Ok(a),
            v => {
                let limit = self.tables.limit();
                Ok(Gf16 {
                    value: self.tables.exp((limit - self.tables.log(v as usize)) % limit),
                })
            }
        }
    }

    #[inline]
    fn div(&self, a: Gf16, b: Gf16) -> Result<Gf16> {
        self.check(a)?;
        self.check(b)?;
        if b.value == 0 {
            return Err(FieldError::DivisionByZero);
        }
        if a.value == 0 || b.value == 1 {
            return Ok(a);
        }
        let limit = self.tables.limit();
        let log_diff = (self.tables.log(a.value as usize) + limit
            - self.tables.log(b.value as usize))
            % limit;
        Ok(Gf16 {
            value: self.tables.exp(log_diff),
        })
    }

    fn pow(&self, base: Gf16, exponent: u64) -> Gf16 {
        if exponent == 0 {
            return Gf16::ONE;
        }
        let base = self.reduce(base);
        if base == 0 {
            return Gf16::ZERO;
        }
        let limit = self.tables.limit() as u64;
        let log_base = self.tables.log(base) as u64;
        self.exp(log_base * (exponent % limit))
    }
}
