//! Prime field GF(p) arithmetic
//!
//! Elements are stored in `P::Word`; intermediate results are computed in
//! wider integers so any modulus that fits the storage word works.

use super::{FieldElement, FieldError, GaloisField, PrimeModulus, Result, Word};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element of GF(p)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeElement<P: PrimeModulus> {
    value: P::Word,
    _modulus: PhantomData<P>,
}

impl<P: PrimeModulus> PrimeElement<P> {
    #[inline]
    const fn from_word(value: P::Word) -> Self {
        Self {
            value,
            _modulus: PhantomData,
        }
    }

    /// Caller guarantees `value < P::MODULUS`
    #[inline]
    fn from_reduced(value: u64) -> Self {
        Self::from_word(P::Word::truncate(value))
    }

    pub fn value(&self) -> P::Word {
        self.value
    }
}

impl<P: PrimeModulus> FieldElement for PrimeElement<P> {
    const ZERO: Self = Self::from_word(P::Word::ZERO);
    const ONE: Self = Self::from_word(P::Word::ONE);

    #[inline]
    fn to_u64(self) -> u64 {
        self.value.widen()
    }
}

impl<P: PrimeModulus> Add for PrimeElement<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_reduced((self.to_u64() + rhs.to_u64()) % P::MODULUS)
    }
}

impl<P: PrimeModulus> AddAssign for PrimeElement<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: PrimeModulus> Sub for PrimeElement<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_reduced((self.to_u64() + P::MODULUS - rhs.to_u64()) % P::MODULUS)
    }
}

impl<P: PrimeModulus> SubAssign for PrimeElement<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: PrimeModulus> fmt::Display for PrimeElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// GF(p) for the compile-time prime `P::MODULUS`
///
/// Primality is not checked. With a composite modulus [`GaloisField::reciprocal`]
/// reports [`FieldError::NotInvertible`] for values sharing a factor with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeField<P: PrimeModulus> {
    _modulus: PhantomData<P>,
}

impl<P: PrimeModulus> PrimeField<P> {
    pub const fn new() -> Self {
        Self {
            _modulus: PhantomData,
        }
    }

    pub const fn modulus(&self) -> u64 {
        P::MODULUS
    }
}

impl<P: PrimeModulus> GaloisField for PrimeField<P> {
    type Element = PrimeElement<P>;

    #[inline]
    fn order(&self) -> u64 {
        P::MODULUS
    }

    fn element(&self, value: u64) -> Result<Self::Element> {
        if value >= P::MODULUS {
            return Err(FieldError::OutOfRange {
                value,
                order: P::MODULUS,
            });
        }
        Ok(PrimeElement::from_reduced(value))
    }

    #[inline]
    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element {
        let product = a.to_u64() as u128 * b.to_u64() as u128 % P::MODULUS as u128;
        PrimeElement::from_reduced(product as u64)
    }

    /// Extended Euclidean algorithm on `(p, value)`
    fn reciprocal(&self, a: Self::Element) -> Result<Self::Element> {
        let value = a.to_u64();
        if value == 0 {
            return Err(FieldError::DivisionByZero);
        }
        if value == 1 {
            return Ok(a);
        }

        let modulus = P::MODULUS as i128;
        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (modulus, value as i128);
        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return Err(FieldError::NotInvertible {
                value,
                modulus: P::MODULUS,
            });
        }
        if t < 0 {
            t += modulus;
        }
        Ok(PrimeElement::from_reduced(t as u64))
    }
}
