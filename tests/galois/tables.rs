//! Table generation and lifecycle tests

use gfcode::galois::tables::is_primitive;
use gfcode::galois::{FieldError, GaloisField, Gf16Field, Gf8Field, LogTables};
use gfcode::FieldElement;

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_gf256_log_exp_tables() {
    let tables = LogTables::<u8>::generate(285).unwrap();
    assert_eq!(tables.order(), 256);
    assert_eq!(tables.limit(), 255);
    assert_eq!(tables.degree(), 8);
    assert_eq!(tables.exp(0), 1);
    assert_eq!(tables.exp(1), 2);
    assert_eq!(tables.exp(8), 0x1D);
    assert_eq!(tables.log(2), 1);
    assert_eq!(tables.log(0x1D), 8);
}

#[test]
fn test_sentinel_entries() {
    let tables = LogTables::<u16>::generate(16427).unwrap();
    let limit = tables.limit();
    assert_eq!(limit, (1 << 14) - 1);
    assert_eq!(tables.log(0), limit);
    assert_eq!(tables.exp(limit), 0);
}

#[test]
fn test_exp_is_permutation_of_nonzero_elements() {
    let tables = LogTables::<u16>::generate(69643).unwrap();
    let mut seen = vec![false; tables.order()];
    for i in 0..tables.limit() {
        let v = tables.exp(i) as usize;
        assert!(v != 0);
        assert!(!seen[v], "x^{} = {} repeats", i, v);
        seen[v] = true;
    }
    assert!(seen[1..].iter().all(|&s| s));
}

#[test]
fn test_non_primitive_polynomial_rejected() {
    // AES polynomial: irreducible but x has order 51
    assert_eq!(
        Gf8Field::generate(0x11B),
        Err(FieldError::NotPrimitive { poly: 0x11B })
    );
    // x^8: reducible
    assert_eq!(
        Gf8Field::generate(0x100),
        Err(FieldError::NotPrimitive { poly: 0x100 })
    );
}

#[test]
fn test_degree_out_of_range() {
    assert_eq!(
        Gf8Field::generate(0x1100B),
        Err(FieldError::InvalidConfiguration {
            poly: 0x1100B,
            degree: 16,
            max_degree: 8
        })
    );
    assert_eq!(
        Gf16Field::generate(4299161607),
        Err(FieldError::InvalidConfiguration {
            poly: 4299161607,
            degree: 32,
            max_degree: 16
        })
    );
    assert!(matches!(
        Gf8Field::generate(1),
        Err(FieldError::InvalidConfiguration { degree: 0, .. })
    ));
}

#[test]
fn test_is_primitive() {
    for poly in [19, 25, 285, 16427, 69643] {
        assert_eq!(is_primitive(poly), Ok(true), "poly {}", poly);
    }
    assert_eq!(is_primitive(0x11B), Ok(false));
    assert_eq!(is_primitive(0x100), Ok(false));
    assert!(matches!(
        is_primitive(4299161607),
        Err(FieldError::InvalidConfiguration { .. })
    ));
}

// ============================================================================
// Product Tables
// ============================================================================

#[test]
fn test_product_table_rows() {
    let field = Gf8Field::generate(285).unwrap();
    let tables = field.tables();
    assert_eq!(tables.order(), 256);
    for a in [0u8, 1, 2, 0x53, 0xFF] {
        let row = tables.row(a);
        for b in 0..=255u8 {
            assert_eq!(row[b as usize], tables.mul(a, b));
        }
    }
    assert_eq!(tables.inv(1), 1);
    assert_eq!(tables.mul(2, tables.inv(2)), 1);
}

#[test]
fn test_memory_usage() {
    let field = Gf8Field::generate(285).unwrap();
    assert_eq!(field.memory_usage(), 256 * 256 + 256);

    let field = Gf16Field::generate(69643).unwrap();
    assert_eq!(field.memory_usage(), 2 * 65536 * 2);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_generate_destroy_generate_is_deterministic() {
    let first = Gf16Field::generate(16427).unwrap();
    let snapshot = first.tables().clone();
    first.destroy();

    let second = Gf16Field::generate(16427).unwrap();
    assert_eq!(second.tables(), &snapshot);

    let small = Gf8Field::generate(19).unwrap();
    let snapshot = small.tables().clone();
    small.destroy();
    assert_eq!(Gf8Field::generate(19).unwrap().tables(), &snapshot);
}

#[test]
fn test_independent_contexts() {
    let gf16 = Gf8Field::generate(19).unwrap();
    let gf16_alt = Gf8Field::generate(25).unwrap();
    let a = gf16.element(8).unwrap();
    let b = gf16.element(2).unwrap();
    // x^4 = x + 1 under 19, x^4 = x^3 + 1 under 25
    assert_eq!(gf16.mul(a, b).to_u64(), 3);
    assert_eq!(gf16_alt.mul(a, b).to_u64(), 9);
}

#[test]
fn test_gf16_field_log_exp() {
    let field = Gf16Field::generate(69643).unwrap();
    let two = field.element(2).unwrap();
    assert_eq!(field.log(two), Ok(1));
    assert_eq!(field.exp(16).to_u64(), 0x100B);
    assert_eq!(field.exp(65535).to_u64(), 1);
    assert_eq!(field.log(field.element(0).unwrap()), Err(FieldError::DivisionByZero));
}
