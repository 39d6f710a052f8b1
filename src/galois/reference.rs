//! Reference GF(2^d) arithmetic
//!
//! Carry-less shift-and-add multiplication and a binary polynomial extended
//! Euclidean algorithm for reciprocals. No tables, so it works for any degree
//! up to 32 (`u32` words), but it is slow. The table-driven fields are checked
//! against this implementation bit for bit.
//!
//! The polynomial is trusted to be primitive for its degree; nothing here can
//! afford to verify that for degree 32. See [`crate::galois::tables::is_primitive`].

use super::{degree, FieldElement, FieldError, GaloisField, PrimitivePolynomial, Result, Word};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element of GF(2^d) for the reference field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceElement<P: PrimitivePolynomial> {
    value: P::Word,
    _poly: PhantomData<P>,
}

impl<P: PrimitivePolynomial> ReferenceElement<P> {
    #[inline]
    const fn from_word(value: P::Word) -> Self {
        Self {
            value,
            _poly: PhantomData,
        }
    }

    pub fn value(&self) -> P::Word {
        self.value
    }
}

impl<P: PrimitivePolynomial> FieldElement for ReferenceElement<P> {
    const ZERO: Self = Self::from_word(P::Word::ZERO);
    const ONE: Self = Self::from_word(P::Word::ONE);

    #[inline]
    fn to_u64(self) -> u64 {
        self.value.widen()
    }
}

// Addition (XOR in characteristic 2)
impl<P: PrimitivePolynomial> Add for ReferenceElement<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_word(P::Word::truncate(self.to_u64() ^ rhs.to_u64()))
    }
}

impl<P: PrimitivePolynomial> AddAssign for ReferenceElement<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Subtraction (same as addition in GF(2^n))
impl<P: PrimitivePolynomial> Sub for ReferenceElement<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl<P: PrimitivePolynomial> SubAssign for ReferenceElement<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: PrimitivePolynomial> fmt::Display for ReferenceElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// GF(2^d) reduced by the compile-time polynomial `P::POLY`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceField<P: PrimitivePolynomial> {
    _poly: PhantomData<P>,
}

impl<P: PrimitivePolynomial> ReferenceField<P> {
    const DEGREE: u32 = match degree(P::POLY) {
        Some(d) => d,
        None => 0,
    };

    pub const fn new() -> Self {
        Self { _poly: PhantomData }
    }

    pub const fn degree(&self) -> u32 {
        Self::DEGREE
    }

    pub const fn polynomial(&self) -> u64 {
        P::POLY
    }
}

/// Carry-less product of `a` and `b` reduced by `poly` of degree `d`
///
/// Walks the bits of the smaller operand, doubling the larger one each step.
pub(crate) fn carryless_mul(mut a: u64, mut b: u64, poly: u64, d: u32) -> u64 {
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    let mut product = 0u64;
    while a != 0 && b != 0 {
        if b & 1 == 1 {
            product ^= a;
        }
        if a >> (d - 1) == 1 {
            a = (a << 1) ^ poly;
        } else {
            a <<= 1;
        }
        b >>= 1;
    }
    product
}

/// Inverse of nonzero `value` modulo `poly` by the binary extended Euclidean algorithm
///
/// `(r, t)` and `(new_r, new_t)` track remainder/coefficient pairs as bit
/// patterns; the pairs swap whenever the degree difference turns negative.
pub(crate) fn carryless_reciprocal(value: u64, poly: u64) -> u64 {
    if value == 1 {
        return 1;
    }
    let deg = |x: u64| 63 - x.leading_zeros() as i64;

    let (mut r, mut t) = (value, 1u64);
    let mut k = deg(r);
    let shift = deg(poly) - k;
    let mut new_r = poly ^ (r << shift);
    let mut new_t = t << shift;

    while new_r != 1 {
        let l = deg(new_r);
        let mut j = l - k;
        if j < 0 {
            j = -j;
            k = l;
            std::mem::swap(&mut new_r, &mut r);
            std::mem::swap(&mut new_t, &mut t);
        }
        new_r ^= r << j;
        new_t ^= t << j;
    }
    new_t
}

impl<P: PrimitivePolynomial> GaloisField for ReferenceField<P> {
    type Element = ReferenceElement<P>;

    #[inline]
    fn order(&self) -> u64 {
        1 << Self::DEGREE
    }

    fn element(&self, value: u64) -> Result<Self::Element> {
        if value >= self.order() {
            return Err(FieldError::OutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(ReferenceElement::from_word(P::Word::truncate(value)))
    }

    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element {
        let product = carryless_mul(a.to_u64(), b.to_u64(), P::POLY, Self::DEGREE);
        ReferenceElement::from_word(P::Word::truncate(product))
    }

    fn reciprocal(&self, a: Self::Element) -> Result<Self::Element> {
        if a.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let inverse = carryless_reciprocal(a.to_u64(), P::POLY);
        Ok(ReferenceElement::from_word(P::Word::truncate(inverse)))
    }
}
