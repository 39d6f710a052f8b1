//! Named primitive polynomials and prime moduli
//!
//! | Marker | Polynomial | Field |
//! |---|---|---|
//! | [`Poly19`] | x⁴ + x + 1 | GF(2^4) |
//! | [`Poly285`] | x⁸ + x⁴ + x³ + x² + 1 (0x11D) | GF(2^8) |
//! | [`Poly16427`] | x¹⁴ + x⁵ + x³ + x + 1 (0x402B) | GF(2^14) |
//! | [`Poly69643`] | x¹⁶ + x¹² + x³ + x + 1 (0x1100B, the PAR2 polynomial) | GF(2^16) |
//! | [`Poly4299161607`] | x³² + x²² + x² + x + 1 | GF(2^32) |

use super::{PrimeModulus, PrimitivePolynomial};

macro_rules! primitive_polynomial {
    ($(#[$meta:meta])* $name:ident, $word:ty, $poly:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl PrimitivePolynomial for $name {
            type Word = $word;
            const POLY: u64 = $poly;
        }
    };
}

macro_rules! prime_modulus {
    ($(#[$meta:meta])* $name:ident, $word:ty, $modulus:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl PrimeModulus for $name {
            type Word = $word;
            const MODULUS: u64 = $modulus;
        }
    };
}

primitive_polynomial!(
    /// x⁴ + x + 1
    Poly19,
    u8,
    19
);
primitive_polynomial!(
    /// x⁸ + x⁴ + x³ + x² + 1
    Poly285,
    u8,
    285
);
primitive_polynomial!(
    /// x¹⁴ + x⁵ + x³ + x + 1
    Poly16427,
    u16,
    16427
);
primitive_polynomial!(
    /// x¹⁶ + x¹² + x³ + x + 1
    Poly69643,
    u16,
    69643
);
primitive_polynomial!(
    /// x³² + x²² + x² + x + 1
    Poly4299161607,
    u32,
    4299161607
);

prime_modulus!(
    /// 2^8 + 1, stored in 16 bits
    Prime257,
    u16,
    257
);
prime_modulus!(
    /// 2^16 + 1, stored in 32 bits
    Prime65537,
    u32,
    65537
);
