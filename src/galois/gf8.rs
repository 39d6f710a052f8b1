//! Small-order GF(2^d) with full lookup tables (d ≤ 8)
//!
//! Every product and inverse is a single table lookup. Memory is
//! `order² + order` bytes, 64 KiB for GF(2^8).

use super::tables::{LogTables, ProductTables};
use super::{FieldElement, FieldError, GaloisField, Result};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element of a [`Gf8Field`]
///
/// Elements do not record which field produced them. Handing one to a field of
/// smaller order makes `reciprocal` and `div` fail with `OutOfRange`, while
/// `mul` keeps only the low `degree` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Gf8 {
    value: u8,
}

impl Gf8 {
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl FieldElement for Gf8 {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };

    #[inline]
    fn to_u64(self) -> u64 {
        self.value as u64
    }
}

// Addition (XOR in Galois fields)
impl Add for Gf8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value ^ rhs.value,
        }
    }
}

impl AddAssign for Gf8 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Gf8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl SubAssign for Gf8 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl From<Gf8> for u8 {
    fn from(val: Gf8) -> Self {
        val.value
    }
}

impl fmt::Display for Gf8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// GF(2^d), d ≤ 8, owning its multiplication and inverse tables
///
/// Constructing the field generates the tables; dropping it (or calling
/// [`Gf8Field::destroy`]) releases them. Independent fields with different
/// polynomials can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf8Field {
    poly: u64,
    tables: ProductTables,
}

impl Gf8Field {
    pub const MAX_DEGREE: u32 = 8;

    /// Generate tables for `poly`, a primitive polynomial of degree 1..=8
    pub fn generate(poly: u64) -> Result<Self> {
        let log = LogTables::<u8>::generate(poly)?;
        let tables = ProductTables::from_log_tables(&log);
        Ok(Self { poly, tables })
    }

    /// Release the tables
    pub fn destroy(self) {}

    pub fn polynomial(&self) -> u64 {
        self.poly
    }

    pub fn tables(&self) -> &ProductTables {
        &self.tables
    }

    pub fn memory_usage(&self) -> usize {
        self.tables.memory_usage()
    }

    /// Reject elements produced by a field of larger order
    #[inline]
    fn check(&self, a: Gf8) -> Result<()> {
        if a.value as usize >= self.tables.order() {
            return Err(FieldError::OutOfRange {
                value: a.value as u64,
                order: self.tables.order() as u64,
            });
        }
        Ok(())
    }
}

impl GaloisField for Gf8Field {
    type Element = Gf8;

    #[inline]
    fn order(&self) -> u64 {
        self.tables.order() as u64
    }

    fn element(&self, value: u64) -> Result<Gf8> {
        if value >= self.order() {
            return Err(FieldError::OutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(Gf8 { value: value as u8 })
    }

    /// Elements of a larger field are reduced to the low `degree` bits
    #[inline]
    fn mul(&self, a: Gf8, b: Gf8) -> Gf8 {
        Gf8 {
            value: self.tables.mul(a.value, b.value),
        }
    }

    #[inline]
    fn reciprocal(&self, a: Gf8) -> Result<Gf8> {
        self.check(a)?;
        if a.value == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(Gf8 {
            value: self.tables.inv(a.value),
        })
    }

    fn div(&self, a: Gf8, b: Gf8) -> Result<Gf8> {
        self.check(a)?;
        Ok(self.mul(a, self.reciprocal(b)?))
    }
}
