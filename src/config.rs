//! Configuration for coding runs
//!
//! Used by the `gfcode` binary and by anything else that wants to pick a field
//! and a (K, N) pair from user input.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from validating a [`CoderConfig`] or parsing a [`FieldKind`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("message must contain at least one symbol")]
    EmptyMessage,

    #[error("codeword of {total} symbols cannot carry {data} data symbols")]
    CodewordTooShort { data: usize, total: usize },

    #[error("{scheme} coding needs {needed} distinct coordinates but the field has {order}")]
    ExceedsOrder {
        scheme: Scheme,
        needed: u64,
        order: u64,
    },

    #[error(
        "default Cauchy coordinates 0..{data} and {data}..{end} contain a pair summing to zero mod {modulus}"
    )]
    NegatedCoordinates { data: usize, end: usize, modulus: u64 },

    #[error("unknown field {0:?} (expected one of: {names})", names = FieldKind::NAMES.join(", "))]
    UnknownField(String),
}

/// Erasure coding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Cauchy,
    Lagrange,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Cauchy => write!(f, "Cauchy"),
            Scheme::Lagrange => write!(f, "Lagrange"),
        }
    }
}

/// Configuration for one encode/erase/decode run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoderConfig {
    /// K: message symbols
    pub data_symbols: usize,
    /// N: codeword symbols
    pub total_symbols: usize,
    /// Seed for message and erasure selection (None = from entropy)
    pub seed: Option<u64>,
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            data_symbols: 7,
            total_symbols: 29,
            seed: None,
            threads: 0, // Auto-detect CPU cores
        }
    }
}

impl CoderConfig {
    pub fn new(data_symbols: usize, total_symbols: usize) -> Self {
        Self {
            data_symbols,
            total_symbols,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let defaults = Self::default();
        Self {
            data_symbols: matches
                .get_one::<usize>("data")
                .copied()
                .unwrap_or(defaults.data_symbols),
            total_symbols: matches
                .get_one::<usize>("total")
                .copied()
                .unwrap_or(defaults.total_symbols),
            seed: matches.get_one::<u64>("seed").copied(),
            threads: matches.get_one::<usize>("threads").copied().unwrap_or(0),
        }
    }

    /// Erasures the code tolerates: N - K
    pub fn redundancy(&self) -> usize {
        self.total_symbols.saturating_sub(self.data_symbols)
    }

    /// Check that the run fits in the field `kind`
    ///
    /// Cauchy coding needs K + N distinct coordinates (message and codeword
    /// sets are disjoint); Lagrange coding with fixed targets `0..N` needs N.
    /// Over GF(p) the default Cauchy coordinates `0..K` and `K..K+N` must also
    /// keep every row + column below p, which means 2K + N - 1 ≤ p.
    pub fn validate(&self, kind: FieldKind, scheme: Scheme) -> Result<(), ConfigError> {
        let order = kind.order();
        if self.data_symbols == 0 {
            return Err(ConfigError::EmptyMessage);
        }
        if self.total_symbols < self.data_symbols {
            return Err(ConfigError::CodewordTooShort {
                data: self.data_symbols,
                total: self.total_symbols,
            });
        }
        let needed = match scheme {
            Scheme::Cauchy => (self.data_symbols + self.total_symbols) as u64,
            Scheme::Lagrange => self.total_symbols as u64,
        };
        if needed > order {
            return Err(ConfigError::ExceedsOrder {
                scheme,
                needed,
                order,
            });
        }
        if scheme == Scheme::Cauchy && kind.is_prime() {
            let largest_sum = (2 * self.data_symbols + self.total_symbols - 2) as u64;
            if largest_sum >= order {
                return Err(ConfigError::NegatedCoordinates {
                    data: self.data_symbols,
                    end: self.data_symbols + self.total_symbols,
                    modulus: order,
                });
            }
        }
        Ok(())
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            n => n,
        }
    }
}

/// Fields selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// GF(257)
    Prime257,
    /// GF(65537)
    Prime65537,
    /// GF(2^4), full tables, polynomial 19
    Gf16,
    /// GF(2^8), full tables, polynomial 285
    Gf256,
    /// GF(2^14), log/exp tables, polynomial 16427
    Gf16384,
    /// GF(2^16), log/exp tables, polynomial 69643
    Gf65536,
    /// GF(2^32), reference arithmetic, polynomial 4299161607
    Ref32,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Prime257,
        FieldKind::Prime65537,
        FieldKind::Gf16,
        FieldKind::Gf256,
        FieldKind::Gf16384,
        FieldKind::Gf65536,
        FieldKind::Ref32,
    ];

    pub const NAMES: [&'static str; 7] = [
        "prime257", "prime65537", "gf16", "gf256", "gf16384", "gf65536", "ref32",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Prime257 => "prime257",
            FieldKind::Prime65537 => "prime65537",
            FieldKind::Gf16 => "gf16",
            FieldKind::Gf256 => "gf256",
            FieldKind::Gf16384 => "gf16384",
            FieldKind::Gf65536 => "gf65536",
            FieldKind::Ref32 => "ref32",
        }
    }

    pub fn order(&self) -> u64 {
        match self {
            FieldKind::Prime257 => 257,
            FieldKind::Prime65537 => 65537,
            FieldKind::Gf16 => 1 << 4,
            FieldKind::Gf256 => 1 << 8,
            FieldKind::Gf16384 => 1 << 14,
            FieldKind::Gf65536 => 1 << 16,
            FieldKind::Ref32 => 1 << 32,
        }
    }

    /// Reduction polynomial for binary fields, None for prime fields
    pub fn polynomial(&self) -> Option<u64> {
        match self {
            FieldKind::Prime257 | FieldKind::Prime65537 => None,
            FieldKind::Gf16 => Some(19),
            FieldKind::Gf256 => Some(285),
            FieldKind::Gf16384 => Some(16427),
            FieldKind::Gf65536 => Some(69643),
            FieldKind::Ref32 => Some(4299161607),
        }
    }

    /// GF(p) rather than GF(2^d)
    pub fn is_prime(&self) -> bool {
        matches!(self, FieldKind::Prime257 | FieldKind::Prime65537)
    }

    /// Whether a table-driven implementation backs this field
    pub fn is_table_driven(&self) -> bool {
        matches!(
            self,
            FieldKind::Gf16 | FieldKind::Gf256 | FieldKind::Gf16384 | FieldKind::Gf65536
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}
