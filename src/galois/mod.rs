//! Finite field arithmetic
//!
//! Every field in this crate implements [`GaloisField`], a context object that
//! owns whatever state the arithmetic needs (nothing for prime and reference
//! fields, lookup tables for the table-driven binary fields). Elements are
//! small `Copy` values that only carry their integer representation.
//!
//! ## Field variants
//!
//! - [`PrimeField`]: GF(p) for a compile-time prime `p`
//! - [`ReferenceField`]: GF(2^d) by carry-less multiplication, used as the
//!   correctness oracle for the table variants
//! - [`Gf8Field`]: GF(2^d) for d ≤ 8 with full multiplication and inverse tables
//! - [`Gf16Field`]: GF(2^d) for d ≤ 16 with log/exp tables only
//!
//! Addition and subtraction never need tables, so they are plain operator
//! impls on the element types. Multiplication, division and reciprocals go
//! through the field context.

pub mod error;
pub mod gf16;
pub mod gf8;
pub mod polynomials;
pub mod prime;
pub mod reference;
pub mod tables;

pub use error::{FieldError, Result};
pub use gf16::{Gf16, Gf16Field};
pub use gf8::{Gf8, Gf8Field};
pub use polynomials::*;
pub use prime::{PrimeElement, PrimeField};
pub use reference::{ReferenceElement, ReferenceField};
pub use tables::{LogTables, ProductTables};

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Unsigned storage width for field elements
pub trait Word:
    Copy + Eq + Ord + Hash + Debug + Display + Default + Send + Sync + 'static
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Keep the low `BITS` bits of `value`
    fn truncate(value: u64) -> Self;

    fn widen(self) -> u64;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn truncate(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

/// Bit-degree of a polynomial given as a bit pattern (`x^4 + x + 1` is `0b10011`, degree 4)
///
/// Returns `None` for the zero polynomial.
#[inline]
pub const fn degree(poly: u64) -> Option<u32> {
    if poly == 0 {
        None
    } else {
        Some(63 - poly.leading_zeros())
    }
}

/// A primitive polynomial over GF(2), fixed at compile time
pub trait PrimitivePolynomial: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    type Word: Word;

    /// Full bit pattern including the leading `x^d` term
    const POLY: u64;
}

/// A prime modulus, fixed at compile time
pub trait PrimeModulus: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    type Word: Word;

    const MODULUS: u64;
}

/// A single field element
pub trait FieldElement:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    const ONE: Self;

    fn to_u64(self) -> u64;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Arithmetic context shared by every field implementation
///
/// Erasure coders are written against this trait only and never special-case
/// a concrete representation.
pub trait GaloisField: Sync {
    type Element: FieldElement;

    /// Number of elements in the field
    fn order(&self) -> u64;

    /// Validated constructor: fails with [`FieldError::OutOfRange`] unless `value < order`
    fn element(&self, value: u64) -> Result<Self::Element>;

    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// Multiplicative inverse, [`FieldError::DivisionByZero`] for zero
    fn reciprocal(&self, a: Self::Element) -> Result<Self::Element>;

    #[inline]
    fn add(&self, a: Self::Element, b: Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: Self::Element, b: Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn div(&self, a: Self::Element, b: Self::Element) -> Result<Self::Element> {
        Ok(self.mul(a, self.reciprocal(b)?))
    }

    /// Square-and-multiply exponentiation, `0^0 == 1`
    fn pow(&self, base: Self::Element, mut exponent: u64) -> Self::Element {
        let mut result = Self::Element::ONE;
        let mut square = base;
        while exponent != 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, square);
            }
            square = self.mul(square, square);
            exponent >>= 1;
        }
        result
    }

    /// Every element of the field in ascending integer order
    fn elements(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements {
            field: self,
            next: 0,
        }
    }
}

/// Iterator over all elements of a field, see [`GaloisField::elements`]
pub struct Elements<'f, F: GaloisField> {
    field: &'f F,
    next: u64,
}

impl<F: GaloisField> Iterator for Elements<'_, F> {
    type Item = F::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.field.element(self.next).ok()?;
        self.next += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.field.order().saturating_sub(self.next);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
