//! Galois field arithmetic and Reed-Solomon erasure coding
//!
//! - [`galois`]: prime, reference and table-driven binary fields behind the
//!   [`GaloisField`] trait
//! - [`reed_solomon`]: Cauchy and Lagrange erasure coders generic over any field
//! - [`testbench`]: exhaustive equivalence checks between field implementations
//! - [`config`]: (K, N) and field selection for driver programs

pub mod config;
pub mod galois;
pub mod reed_solomon;
pub mod testbench;

pub use config::{CoderConfig, FieldKind, Scheme};
pub use galois::{FieldElement, FieldError, GaloisField};
pub use reed_solomon::{CauchyCoder, CodeError, LagrangeCoder, Node};
